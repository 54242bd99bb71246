pub mod lookup_builder;
pub mod seven_segment;
