pub mod dataset;
pub mod launch_record;
pub mod launch_site;
pub mod outcome;
pub mod payload_range;
