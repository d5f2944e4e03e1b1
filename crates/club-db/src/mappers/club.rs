//! Club entity <-> model mapper

use club_core::entities::Club;
use club_core::value_objects::Snowflake;

use crate::models::ClubModel;

impl From<ClubModel> for Club {
    fn from(model: ClubModel) -> Self {
        Club {
            id: Snowflake::new(model.id),
            name: model.name,
            location: model.location,
            description: model.description,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
