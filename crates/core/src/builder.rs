//! Record construction. Pure: no IO happens here.

use time::PrimitiveDateTime;

use crate::config::{GeneratorConfig, PetTemplate};
use crate::error::SeedError;
use crate::ids::IdSource;
use crate::record::{AttributeValue, BatchWritePayload, PetItem};
use crate::timestamp::{format_created_at, offset_seconds};

/// Builds records from a shared template and a base timestamp captured once
/// per run.
#[derive(Debug, Clone)]
pub struct RecordBuilder<'a> {
    template: &'a PetTemplate,
    base: PrimitiveDateTime,
}

impl<'a> RecordBuilder<'a> {
    pub fn new(template: &'a PetTemplate, base: PrimitiveDateTime) -> Self {
        RecordBuilder { template, base }
    }

    /// Record `index`: created `index` seconds after the base, named
    /// `<prefix><index>`.
    pub fn build(&self, index: usize, ids: &mut impl IdSource) -> Result<PetItem, SeedError> {
        let created_at = format_created_at(offset_seconds(self.base, index)?)?;
        let t = self.template;

        Ok(PetItem {
            pet_id: AttributeValue::string(ids.next_id()),
            age: AttributeValue::number(t.age),
            breed: AttributeValue::string(&t.breed),
            created_at: AttributeValue::string(created_at),
            description: AttributeValue::string(&t.description),
            gender: AttributeValue::string(&t.gender),
            name: AttributeValue::string(format!("{}{}", t.name_prefix, index)),
            shelter_id: AttributeValue::string(t.shelter_id.to_string()),
            species: AttributeValue::string(&t.species),
            status: AttributeValue::string(t.status.as_str()),
        })
    }

    /// Records `0..count`, in index order.
    pub fn build_all(
        &self,
        count: usize,
        ids: &mut impl IdSource,
    ) -> Result<Vec<PetItem>, SeedError> {
        (0..count).map(|i| self.build(i, &mut *ids)).collect()
    }
}

/// Generate the full payload described by `config`.
pub fn generate(
    config: &GeneratorConfig,
    base: PrimitiveDateTime,
    ids: &mut impl IdSource,
) -> Result<BatchWritePayload, SeedError> {
    config.validate()?;
    let items = RecordBuilder::new(&config.pet, base).build_all(config.count, ids)?;
    Ok(BatchWritePayload::new(config.table_name.clone(), items))
}
