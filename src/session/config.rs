//! Streaming session configuration
//!
//! Credentials and encoder settings handed to the streaming collaborator when
//! a screen joins a channel. Passed explicitly to whatever establishes the
//! session; the tile registry never reads it.

use crate::error::ConfigError;

/// Role of the local user in a live-broadcast channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClientRole {
    /// Publishes local (AR camera) video and receives remote video
    #[default]
    Broadcaster,
    /// Receives remote video only
    Audience,
}

/// Video encoder settings for the local stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoEncoderConfig {
    /// Encoded width in pixels
    pub width: u32,

    /// Encoded height in pixels
    pub height: u32,

    /// Frames per second
    pub frame_rate: u32,

    /// Target bitrate in Kbps (0 = let the SDK choose)
    pub bitrate_kbps: u32,
}

impl Default for VideoEncoderConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            frame_rate: 30,
            bitrate_kbps: 0,
        }
    }
}

/// Configuration for joining a streaming channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Application id issued by the streaming provider
    pub app_id: String,

    /// Channel token (None when the app id has no certificate enabled)
    pub token: Option<String>,

    /// Channel to join
    pub channel: String,

    /// Local user's role
    pub role: ClientRole,

    /// Local video encoder settings
    pub video: VideoEncoderConfig,

    /// Route audio to the speakerphone by default
    pub default_to_speakerphone: bool,
}

impl SessionConfig {
    /// Create a config for the given app id and channel
    pub fn new(app_id: impl Into<String>, channel: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            token: None,
            channel: channel.into(),
            role: ClientRole::default(),
            video: VideoEncoderConfig::default(),
            default_to_speakerphone: true,
        }
    }

    /// Set the channel token
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the client role
    pub fn role(mut self, role: ClientRole) -> Self {
        self.role = role;
        self
    }

    /// Set the encoder dimensions
    pub fn dimensions(mut self, width: u32, height: u32) -> Self {
        self.video.width = width;
        self.video.height = height;
        self
    }

    /// Set the encoder frame rate
    pub fn frame_rate(mut self, fps: u32) -> Self {
        self.video.frame_rate = fps;
        self
    }

    /// Set the encoder bitrate
    pub fn bitrate_kbps(mut self, kbps: u32) -> Self {
        self.video.bitrate_kbps = kbps;
        self
    }

    /// Set speakerphone routing
    pub fn default_to_speakerphone(mut self, enabled: bool) -> Self {
        self.default_to_speakerphone = enabled;
        self
    }

    /// Check the config before it is handed to the streaming SDK
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.app_id.trim().is_empty() {
            return Err(ConfigError::MissingAppId);
        }
        if self.channel.trim().is_empty() {
            return Err(ConfigError::EmptyChannel);
        }
        if self.video.width == 0 || self.video.height == 0 {
            return Err(ConfigError::InvalidDimensions {
                width: self.video.width,
                height: self.video.height,
            });
        }
        if self.video.frame_rate == 0 {
            return Err(ConfigError::InvalidFrameRate);
        }
        Ok(())
    }
}
