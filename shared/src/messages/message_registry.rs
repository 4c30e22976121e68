use std::collections::{BTreeSet, HashMap, HashSet};

use crate::{
    messages::{error::MessageRegistryError, msg_types},
    types::MsgCode,
};

/// A fixed, bidirectional table between message names and wire codes.
///
/// Several names may share one code; the reverse lookup returns all of them.
/// Built once from a static table and immutable afterwards.
#[derive(Clone, Debug)]
pub struct MessageRegistry {
    name_to_id: HashMap<&'static str, MsgCode>,
    id_to_names: HashMap<MsgCode, BTreeSet<&'static str>>,
}

impl MessageRegistry {
    pub fn from_table(table: &[(&'static str, MsgCode)]) -> Result<Self, MessageRegistryError> {
        let mut seen = HashSet::with_capacity(table.len());
        for (name, _) in table {
            if !seen.insert(*name) {
                return Err(MessageRegistryError::DuplicateMessageName {
                    name: (*name).to_string(),
                });
            }
        }
        Ok(Self::build(table))
    }

    /// The client / cluster protocol table.
    pub fn standard() -> Self {
        Self::build(msg_types::standard::TABLE)
    }

    /// The lightweight peer-server protocol table.
    pub fn cmu() -> Self {
        Self::build(msg_types::cmu::TABLE)
    }

    fn build(table: &[(&'static str, MsgCode)]) -> Self {
        let mut name_to_id = HashMap::with_capacity(table.len());
        let mut id_to_names: HashMap<MsgCode, BTreeSet<&'static str>> = HashMap::new();
        for (name, id) in table {
            name_to_id.insert(*name, *id);
            id_to_names.entry(*id).or_default().insert(*name);
        }
        Self {
            name_to_id,
            id_to_names,
        }
    }

    pub fn id_of(&self, name: &str) -> Result<MsgCode, MessageRegistryError> {
        self.name_to_id
            .get(name)
            .copied()
            .ok_or_else(|| MessageRegistryError::UnknownMessageName {
                name: name.to_string(),
            })
    }

    pub fn names_of(&self, id: MsgCode) -> Result<&BTreeSet<&'static str>, MessageRegistryError> {
        self.id_to_names
            .get(&id)
            .ok_or(MessageRegistryError::UnknownMessageId { id })
    }

    /// A printable name for `id`, for diagnostics. Aliases are joined with `|`.
    pub fn describe(&self, id: MsgCode) -> String {
        match self.id_to_names.get(&id) {
            Some(names) => names.iter().copied().collect::<Vec<_>>().join("|"),
            None => format!("UNKNOWN({id})"),
        }
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.name_to_id.contains_key(name)
    }

    pub fn contains_id(&self, id: MsgCode) -> bool {
        self.id_to_names.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.name_to_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.name_to_id.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = (&'static str, MsgCode)> + '_ {
        self.name_to_id.iter().map(|(name, id)| (*name, *id))
    }
}
