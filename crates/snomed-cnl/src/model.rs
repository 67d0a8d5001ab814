//! Concept and relationship model.
//!
//! These are read-only snapshots handed to the renderer by a terminology
//! store. The renderer never mutates them.

use std::collections::BTreeMap;

use crate::attributes::ISA;
use crate::fsn::Fsn;
use crate::SctId;

/// Definition status of a concept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DefinitionStatus {
    /// Not sufficiently defined by its relationships.
    #[default]
    Primitive,
    /// Sufficiently defined by its relationships.
    Defined,
}

impl DefinitionStatus {
    /// Primitive definition status concept id.
    pub const PRIMITIVE_ID: SctId = 900000000000074008;
    /// Defined definition status concept id.
    pub const DEFINED_ID: SctId = 900000000000073002;

    /// Maps a definition status concept id to its variant.
    pub fn from_id(id: SctId) -> Option<Self> {
        match id {
            Self::PRIMITIVE_ID => Some(Self::Primitive),
            Self::DEFINED_ID => Some(Self::Defined),
            _ => None,
        }
    }
}

/// Characteristic type of a relationship. Not used by rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CharacteristicType {
    /// Inferred relationship.
    #[default]
    Inferred,
    /// Additional relationship.
    Additional,
}

impl CharacteristicType {
    /// Inferred relationship concept id.
    pub const INFERRED_ID: SctId = 900000000000011006;
    /// Additional relationship concept id.
    pub const ADDITIONAL_ID: SctId = 900000000000227009;
}

/// A SNOMED CT concept.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Concept {
    /// Concept identifier.
    pub id: SctId,
    /// Whether the concept is active.
    pub active: bool,
    /// Fully Specified Name, e.g. `Fracture of bone (disorder)`.
    pub fsn: String,
    /// Primitive or defined.
    pub definition_status: DefinitionStatus,
}

impl Concept {
    /// Creates an active, primitive concept.
    pub fn new(id: SctId, fsn: impl Into<String>) -> Self {
        Self {
            id,
            active: true,
            fsn: fsn.into(),
            definition_status: DefinitionStatus::Primitive,
        }
    }

    /// Returns the FSN without its semantic tag, in original casing.
    pub fn name(&self) -> &str {
        Fsn::parse(&self.fsn).name
    }

    /// Returns the FSN's semantic tag.
    pub fn semantic_tag(&self) -> Option<&str> {
        Fsn::parse(&self.fsn).semantic_tag
    }

    /// Returns a lightweight reference to this concept.
    pub fn to_ref(&self) -> ConceptRef {
        ConceptRef {
            id: self.id,
            fsn: self.fsn.clone(),
        }
    }
}

/// A concept id with its FSN, as returned for isa-parents.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConceptRef {
    /// Concept identifier.
    pub id: SctId,
    /// Fully Specified Name.
    pub fsn: String,
}

impl ConceptRef {
    /// Creates a concept reference.
    pub fn new(id: SctId, fsn: impl Into<String>) -> Self {
        Self {
            id,
            fsn: fsn.into(),
        }
    }
}

/// An outbound relationship of a concept.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Relationship {
    /// Relationship identifier.
    pub id: SctId,
    /// Source concept.
    pub source_id: SctId,
    /// Relationship type (attribute).
    pub type_id: SctId,
    /// Destination concept.
    pub destination_id: SctId,
    /// FSN of the destination concept.
    pub destination_fsn: String,
    /// Relationship group (0 = ungrouped).
    pub group: u16,
    /// Whether the relationship is active.
    pub active: bool,
    /// Inferred or additional.
    pub characteristic_type: CharacteristicType,
}

impl Relationship {
    /// Creates an active, inferred relationship.
    pub fn new(
        id: SctId,
        source_id: SctId,
        type_id: SctId,
        destination_id: SctId,
        destination_fsn: impl Into<String>,
        group: u16,
    ) -> Self {
        Self {
            id,
            source_id,
            type_id,
            destination_id,
            destination_fsn: destination_fsn.into(),
            group,
            active: true,
            characteristic_type: CharacteristicType::Inferred,
        }
    }

    /// Returns true for IS_A relationships.
    pub fn is_isa(&self) -> bool {
        self.type_id == ISA
    }

    /// Returns true if the relationship type is one of `types`.
    pub fn has_type_in(&self, types: &[SctId]) -> bool {
        types.contains(&self.type_id)
    }
}

/// Returns the relationships whose type is one of `types`, in input order.
pub fn of_types<'a>(
    relationships: &'a [Relationship],
    types: &'a [SctId],
) -> impl Iterator<Item = &'a Relationship> + 'a {
    relationships.iter().filter(move |r| r.has_type_in(types))
}

/// Returns the first relationship of the given type.
pub fn first_of_type(relationships: &[Relationship], type_id: SctId) -> Option<&Relationship> {
    relationships.iter().find(|r| r.type_id == type_id)
}

/// Partitions relationships into relationship groups, ordered by group number.
///
/// Relationships keep their input order within a group.
pub fn by_group(relationships: &[Relationship]) -> BTreeMap<u16, Vec<Relationship>> {
    let mut groups: BTreeMap<u16, Vec<Relationship>> = BTreeMap::new();
    for relationship in relationships {
        groups
            .entry(relationship.group)
            .or_default()
            .push(relationship.clone());
    }
    groups
}
