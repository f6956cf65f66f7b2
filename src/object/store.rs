use std::fs;
use std::io::{Read, Write};
use std::path::PathBuf;

use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use sha1::{Digest, Sha1};

use crate::error::{Error, IoResultExt, Result};
use crate::id::ObjectId;
use crate::object::ObjectKind;
use crate::repo::Repo;

/// build the framed representation `"<kind> <len>\0<payload>"`
///
/// the object id is the SHA-1 of exactly these bytes, header included.
fn frame(kind: ObjectKind, payload: &[u8]) -> Vec<u8> {
    let header = format!("{} {}\0", kind, payload.len());
    let mut framed = Vec::with_capacity(header.len() + payload.len());
    framed.extend_from_slice(header.as_bytes());
    framed.extend_from_slice(payload);
    framed
}

/// write an object to the store
///
/// returns the object id. if an object with the same id already exists the
/// write is skipped entirely: content addressing guarantees the stored
/// bytes are identical, so duplicate writes are idempotent no-ops.
pub fn write_object(repo: &Repo, kind: ObjectKind, payload: &[u8]) -> Result<ObjectId> {
    let framed = frame(kind, payload);
    let id = ObjectId::from_bytes(Sha1::digest(&framed).into());

    let (dir, file) = id.to_path_components();
    let object_dir = repo.objects_path().join(&dir);
    let object_path = object_dir.join(&file);

    // deduplication: if the object already exists, we're done
    if object_path.exists() {
        return Ok(id);
    }

    fs::create_dir_all(&object_dir).with_path(&object_dir)?;

    let level = Compression::new(repo.config().compression);
    let mut encoder = ZlibEncoder::new(Vec::new(), level);
    encoder.write_all(&framed).with_path(&object_path)?;
    let compressed = encoder.finish().with_path(&object_path)?;

    fs::write(&object_path, compressed).with_path(&object_path)?;

    Ok(id)
}

/// read an object from the store
///
/// decompresses the stored bytes, parses the `"<kind> <len>\0"` header and
/// validates the declared length against the actual payload length. the id
/// is trusted as the lookup key and not re-derived.
pub fn read_object(repo: &Repo, id: &ObjectId) -> Result<(ObjectKind, Vec<u8>)> {
    let path = object_path(repo, id);

    let compressed = fs::read(&path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::ObjectNotFound(*id)
        } else {
            Error::Io { path, source: e }
        }
    })?;

    let mut decoder = ZlibDecoder::new(&compressed[..]);
    let mut decompressed = Vec::new();
    decoder
        .read_to_end(&mut decompressed)
        .map_err(|_| Error::CorruptStream(*id))?;

    // header and payload are separated by the first NUL byte
    let nul = decompressed
        .iter()
        .position(|&b| b == 0)
        .ok_or(Error::MalformedHeader(*id))?;

    let header =
        std::str::from_utf8(&decompressed[..nul]).map_err(|_| Error::MalformedHeader(*id))?;
    let (token, size_str) = header.split_once(' ').ok_or(Error::MalformedHeader(*id))?;
    let declared: usize = size_str.parse().map_err(|_| Error::MalformedHeader(*id))?;

    let actual = decompressed.len() - nul - 1;
    if declared != actual {
        return Err(Error::SizeMismatch {
            id: *id,
            declared,
            actual,
        });
    }

    let kind = ObjectKind::from_token(token)?;
    let payload = decompressed.split_off(nul + 1);

    Ok((kind, payload))
}

/// get the filesystem path to an object
pub fn object_path(repo: &Repo, id: &ObjectId) -> PathBuf {
    let (dir, file) = id.to_path_components();
    repo.objects_path().join(dir).join(file)
}

/// check if an object exists in the store
pub fn object_exists(repo: &Repo, id: &ObjectId) -> bool {
    object_path(repo, id).exists()
}
