use shaku::{Component, Interface};

use crate::CoreContext;

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
pub trait ResolveChannelInterface: Interface {
    fn run<'a>(&self, ctx: &CoreContext<'a>, repository_name: &str) -> Option<String>;
}

#[derive(Component)]
#[shaku(interface = ResolveChannelInterface)]
pub(crate) struct ResolveChannel;

impl ResolveChannelInterface for ResolveChannel {
    #[tracing::instrument(skip(self, ctx))]
    fn run<'a>(&self, ctx: &CoreContext<'a>, repository_name: &str) -> Option<String> {
        let repository_name = repository_name.to_lowercase();

        ctx.config
            .repository_channel(&repository_name)
            .filter(|c| !c.is_empty())
            .or_else(|| Some(ctx.config.gogs.default_channel.as_str()))
            .filter(|c| !c.is_empty())
            .map(String::from)
    }
}
