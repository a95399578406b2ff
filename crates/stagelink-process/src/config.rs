use std::io::Write;

use stagelink_frame::FrameConfig;

use crate::error::ConfigError;

/// Everything a stage needs before touching either channel: a computation,
/// a codec, and a human-readable process name for log-line prefixing.
///
/// All three are required. Validation happens once, in [`Stage::new`],
/// which fails fast naming the first missing component.
///
/// [`Stage::new`]: crate::stage::Stage::new
pub struct StageConfig<C, P> {
    /// The transformation applied to each message payload.
    pub computation: Option<P>,
    /// The wire codec for this deployment.
    pub codec: Option<C>,
    /// Process name used only for diagnostic line prefixing.
    pub name: Option<String>,
    /// Diagnostic sink override. Defaults to stderr.
    pub log_sink: Option<Box<dyn Write + Send>>,
    /// Framing settings for both channels, including the maximum accepted
    /// payload size.
    pub frame_config: FrameConfig,
}

impl<C, P> Default for StageConfig<C, P> {
    fn default() -> Self {
        Self {
            computation: None,
            codec: None,
            name: None,
            log_sink: None,
            frame_config: FrameConfig::default(),
        }
    }
}

type StageParts<C, P> = (P, C, String, Option<Box<dyn Write + Send>>, FrameConfig);

impl<C, P> StageConfig<C, P> {
    /// Validate and split into the stage's parts.
    pub(crate) fn into_parts(self) -> Result<StageParts<C, P>, ConfigError> {
        let computation = self.computation.ok_or(ConfigError::Missing("computation"))?;
        let codec = self.codec.ok_or(ConfigError::Missing("codec"))?;
        let name = self.name.ok_or(ConfigError::Missing("name"))?;
        if name.is_empty() {
            return Err(ConfigError::EmptyName);
        }
        Ok((computation, codec, name, self.log_sink, self.frame_config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validation_error(config: StageConfig<(), ()>) -> ConfigError {
        match config.into_parts() {
            Ok(_) => panic!("expected validation to fail"),
            Err(err) => err,
        }
    }

    #[test]
    fn reports_first_missing_component() {
        let err = validation_error(StageConfig::default());
        assert!(matches!(err, ConfigError::Missing("computation")));

        let err = validation_error(StageConfig {
            computation: Some(()),
            ..StageConfig::default()
        });
        assert!(matches!(err, ConfigError::Missing("codec")));

        let err = validation_error(StageConfig {
            computation: Some(()),
            codec: Some(()),
            ..StageConfig::default()
        });
        assert!(matches!(err, ConfigError::Missing("name")));
    }

    #[test]
    fn rejects_empty_name() {
        let err = validation_error(StageConfig {
            computation: Some(()),
            codec: Some(()),
            name: Some(String::new()),
            ..StageConfig::default()
        });
        assert!(matches!(err, ConfigError::EmptyName));
    }

    #[test]
    fn complete_config_splits() {
        let config: StageConfig<u8, u8> = StageConfig {
            computation: Some(1),
            codec: Some(2),
            name: Some("demo".to_string()),
            ..StageConfig::default()
        };
        let (computation, codec, name, sink, frame_config) = config.into_parts().unwrap();
        assert_eq!(computation, 1);
        assert_eq!(codec, 2);
        assert_eq!(name, "demo");
        assert!(sink.is_none());
        assert_eq!(
            frame_config.max_payload_size,
            FrameConfig::default().max_payload_size
        );
    }

    #[test]
    fn frame_config_override_is_carried() {
        let config: StageConfig<(), ()> = StageConfig {
            computation: Some(()),
            codec: Some(()),
            name: Some("demo".to_string()),
            frame_config: FrameConfig {
                max_payload_size: 64,
            },
            ..StageConfig::default()
        };
        let (_, _, _, _, frame_config) = config.into_parts().unwrap();
        assert_eq!(frame_config.max_payload_size, 64);
    }
}
