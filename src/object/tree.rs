use crate::error::{Error, Result};
use crate::id::ObjectId;
use crate::object::{read_object, write_object, ObjectKind};
use crate::repo::Repo;

/// a single entry in a tree payload
///
/// the mode is kept as an opaque octal string: the encoder writes whatever
/// digits it is given and the decoder returns whatever digits it scans, with
/// no attempt to reconstruct a full file-type-and-permission value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeEntry {
    pub mode: String,
    pub name: String,
    pub id: ObjectId,
}

impl TreeEntry {
    pub fn new(mode: impl Into<String>, name: impl Into<String>, id: ObjectId) -> Self {
        Self {
            mode: mode.into(),
            name: name.into(),
            id,
        }
    }
}

/// encode entries into a tree payload
///
/// each record is `"<mode> <name>\0"` followed by the 20 raw id bytes, in
/// entry order. entries must already be sorted by name; encoding does not
/// re-sort.
pub fn encode(entries: &[TreeEntry]) -> Vec<u8> {
    let mut payload = Vec::new();
    for entry in entries {
        payload.extend_from_slice(entry.mode.as_bytes());
        payload.push(b' ');
        payload.extend_from_slice(entry.name.as_bytes());
        payload.push(0);
        payload.extend_from_slice(entry.id.as_bytes());
    }
    payload
}

/// decode a tree payload into a single-pass entry iterator
///
/// an empty payload yields an empty sequence: it is the valid encoding of
/// an empty directory.
pub fn decode(payload: &[u8]) -> TreeEntries<'_> {
    TreeEntries { rest: payload }
}

/// iterator over the entries of a tree payload
pub struct TreeEntries<'a> {
    rest: &'a [u8],
}

impl Iterator for TreeEntries<'_> {
    type Item = Result<TreeEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        let space = match self.rest.iter().position(|&b| b == b' ') {
            Some(i) => i,
            None => {
                self.rest = &[];
                return Some(Err(Error::TruncatedEntry("missing space after mode")));
            }
        };
        let mode = &self.rest[..space];
        let after_mode = &self.rest[space + 1..];

        let nul = match after_mode.iter().position(|&b| b == 0) {
            Some(i) => i,
            None => {
                self.rest = &[];
                return Some(Err(Error::TruncatedEntry("missing NUL after name")));
            }
        };
        let name = &after_mode[..nul];
        let after_name = &after_mode[nul + 1..];

        if after_name.len() < 20 {
            self.rest = &[];
            return Some(Err(Error::TruncatedEntry("short object id")));
        }
        let mut id_bytes = [0u8; 20];
        id_bytes.copy_from_slice(&after_name[..20]);
        self.rest = &after_name[20..];

        Some(Ok(TreeEntry {
            mode: String::from_utf8_lossy(mode).into_owned(),
            name: String::from_utf8_lossy(name).into_owned(),
            id: ObjectId::from_bytes(id_bytes),
        }))
    }
}

/// encode entries and write them to the store as a tree object
pub fn write_tree(repo: &Repo, entries: &[TreeEntry]) -> Result<ObjectId> {
    write_object(repo, ObjectKind::Tree, &encode(entries))
}

/// read a tree object and decode all of its entries
pub fn read_tree(repo: &Repo, id: &ObjectId) -> Result<Vec<TreeEntry>> {
    let (kind, payload) = read_object(repo, id)?;
    if kind != ObjectKind::Tree {
        return Err(Error::NotATree(*id));
    }
    decode(&payload).collect()
}
