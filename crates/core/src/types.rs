/// Tier list primary keys are UUID v4 values generated by the service.
pub type DbId = uuid::Uuid;
