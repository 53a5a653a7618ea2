//! JSON persistence
//!
//! Documents are validated on the way in: deserialization goes through the
//! stores' checked constructors.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{PersistError, Result};

/// Serialize a store to a JSON string
pub fn to_json<M: Serialize>(store: &M) -> Result<String> {
    Ok(serde_json::to_string(store)?)
}

/// Parse a store from a JSON string
pub fn from_json<M: DeserializeOwned>(json: &str) -> Result<M> {
    Ok(serde_json::from_str(json)?)
}

/// Write a store to `path` as pretty-printed JSON
pub fn save_json<M: Serialize>(store: &M, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    debug!("saving JSON store to {}", path.display());
    let file = File::create(path).map_err(|e| PersistError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, store)?;
    writer.flush().map_err(|e| PersistError::io(path, e))
}

/// Read a store written by [`save_json`]
pub fn load_json<M: DeserializeOwned>(path: impl AsRef<Path>) -> Result<M> {
    let path = path.as_ref();
    debug!("loading JSON store from {}", path.display());
    let file = File::open(path).map_err(|e| PersistError::io(path, e))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        warn!("rejected JSON store {}: {e}", path.display());
        PersistError::Json(e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use packmat_core::{BandStore, DenseGrid, MatrixStore, SparseStore, TriangularStore};

    #[test]
    fn test_dense_document() {
        let g = DenseGrid::from_vec(1, 2, vec![1.5, -2.0]).unwrap();
        let json = to_json(&g).unwrap();
        assert_eq!(json, r#"{"rows":1,"cols":2,"data":[1.5,-2.0]}"#);
        assert_eq!(from_json::<DenseGrid<f64>>(&json).unwrap(), g);
    }

    #[test]
    fn test_rejects_inconsistent_lengths() {
        let bad = r#"{"rows":2,"cols":2,"data":[1.0]}"#;
        assert!(matches!(
            from_json::<DenseGrid<f64>>(bad),
            Err(PersistError::Json(_))
        ));
        let bad = r#"{"size":3,"packed":[1,2,3]}"#;
        assert!(from_json::<TriangularStore<i32>>(bad).is_err());
        let bad = r#"{"dimension":1,"band_width":2,"grid":[1,2]}"#;
        assert!(from_json::<BandStore<i32>>(bad).is_err());
    }

    #[test]
    fn test_sparse_document_is_normalized() {
        let doc = r#"{"dimension":3,"capacity":4,"entries":[[0,0,5],[1,2,0],[0,0,6]]}"#;
        let s: SparseStore<i64> = from_json(doc).unwrap();
        assert_eq!(s.size(), 1);
        assert_eq!(s.get(0, 0).unwrap(), 6);
        assert_eq!(s.capacity(), 4);

        let out_of_range = r#"{"dimension":2,"capacity":4,"entries":[[2,0,1]]}"#;
        assert!(from_json::<SparseStore<i64>>(out_of_range).is_err());
    }

    #[test]
    fn test_oversized_documents_fail_cleanly() {
        let doc = r#"{"dimension":2,"capacity":1000000000000000,"entries":[[1,1,3]]}"#;
        let s: SparseStore<i64> = from_json(doc).unwrap();
        assert_eq!(s.capacity(), 1_000_000_000_000_000);
        assert_eq!(s.get(1, 1).unwrap(), 3);

        let doc = r#"{"size":10000000000000000,"packed":[1.0]}"#;
        assert!(from_json::<TriangularStore<f64>>(doc).is_err());
        let doc = r#"{"rows":4294967296,"cols":4294967296,"data":[]}"#;
        assert!(from_json::<DenseGrid<f64>>(doc).is_err());
    }

    #[test]
    fn test_band_and_triangular_documents() {
        let mut band = BandStore::<i32>::new(3, 2).unwrap();
        band.set(4, 1, 2).unwrap();
        assert_eq!(from_json::<BandStore<i32>>(&to_json(&band).unwrap()).unwrap(), band);

        let mut t = TriangularStore::<i32>::new(3);
        t.set(8, 2, 1).unwrap();
        assert_eq!(from_json::<TriangularStore<i32>>(&to_json(&t).unwrap()).unwrap(), t);
    }
}
