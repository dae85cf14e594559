pub mod aws_s3;
pub mod provider;
pub mod types;

pub use aws_s3::AwsS3;
pub use provider::ObjectStore;
pub use types::Destination;
