use anyhow::Result;
use invasion_game::{AppConfig, InvasionApp, MirrorPolicy};
use invasion_sdl2::App;
use invasion_sdl2::{SdlContext, SdlInitInfo};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LaunchOptions {
    pub mirror: MirrorPolicy,
}

impl LaunchOptions {
    /// Reads the optional mirror policy from the positional arguments.
    pub fn from_args(mut args: impl Iterator<Item = String>) -> Result<Self> {
        let mirror = match args.next() {
            Some(arg) => arg.parse()?,
            None => MirrorPolicy::default(),
        };
        Ok(LaunchOptions { mirror })
    }
}

pub fn run(options: LaunchOptions) -> Result<()> {
    let config = AppConfig::builder().mirror(options.mirror).build();
    let app = InvasionApp::new(config);
    let init_info = SdlInitInfo::builder()
        .width(app.width())
        .height(app.height())
        .scale(app.scale())
        .title(app.title())
        .build();
    SdlContext::run(init_info, app)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn no_arguments_mirror_the_early_levels() {
        let options = LaunchOptions::from_args(args(&[])).unwrap();
        assert_eq!(options.mirror, MirrorPolicy::BelowLevel(3));
    }

    #[test]
    fn mirror_policy_argument_is_parsed() {
        let options = LaunchOptions::from_args(args(&["never"])).unwrap();
        assert_eq!(options.mirror, MirrorPolicy::Never);
        let options = LaunchOptions::from_args(args(&["4"])).unwrap();
        assert_eq!(options.mirror, MirrorPolicy::BelowLevel(4));
    }

    #[test]
    fn unknown_policy_is_an_error() {
        assert!(LaunchOptions::from_args(args(&["sideways"])).is_err());
    }
}
