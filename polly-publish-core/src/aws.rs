//! Shared AWS SDK configuration loading

use aws_config::{BehaviorVersion, Region, SdkConfig};

#[derive(Debug, Clone)]
pub struct AwsConfig {
    pub profile: Option<String>,
    pub region: String,
}

impl AwsConfig {
    /// Resolve credentials through the default provider chain, optionally
    /// pinned to a named profile.
    pub async fn load(&self) -> SdkConfig {
        let mut aws_config_loader = aws_config::defaults(BehaviorVersion::latest());

        if let Some(profile) = &self.profile {
            aws_config_loader = aws_config_loader.profile_name(profile);
        }

        aws_config_loader = aws_config_loader.region(Region::new(self.region.clone()));

        let sdk_config = aws_config_loader.load().await;
        tracing::debug!(
            region = %self.region,
            profile = ?self.profile,
            "Loaded AWS configuration"
        );
        sdk_config
    }
}
