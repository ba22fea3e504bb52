use ludi_core::ComputedPrice;
use ludi_core::entities::{Facilitator, Game, ScheduleEntry, Testimonial};
use schemars::{Schema, schema_for};

use crate::cli::{GlobalFlags, SchemaEntity};
use crate::output::output;

fn schema(entity: SchemaEntity) -> Schema {
    match entity {
        SchemaEntity::Game => schema_for!(Game),
        SchemaEntity::Facilitator => schema_for!(Facilitator),
        SchemaEntity::Schedule => schema_for!(ScheduleEntry),
        SchemaEntity::Testimonial => schema_for!(Testimonial),
        SchemaEntity::Price => schema_for!(ComputedPrice),
    }
}

/// Handle `ludi schema`.
pub fn handle(entity: SchemaEntity, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&schema(entity), flags.format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_schema_lists_properties() {
        let value = serde_json::to_value(schema(SchemaEntity::Game)).unwrap();
        let properties = value["properties"].as_object().expect("object schema");
        for key in ["id", "title", "price", "discount", "coverImage", "features"] {
            assert!(properties.contains_key(key), "missing {key}");
        }
    }

    #[test]
    fn price_schema_uses_final_field() {
        let value = serde_json::to_value(schema(SchemaEntity::Price)).unwrap();
        assert!(value["properties"]["final"].is_object());
    }
}
