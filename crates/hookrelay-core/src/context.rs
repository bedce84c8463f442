use hookrelay_chat_interface::ChatService;
use hookrelay_config::Config;
use hookrelay_templates::TemplateService;

use crate::CoreModule;

pub struct CoreContext<'a> {
    pub config: &'a Config,
    pub core_module: &'a CoreModule,
    pub chat_service: &'a (dyn ChatService + 'a),
    pub template_service: &'a (dyn TemplateService + 'a),
}

#[cfg(any(test, feature = "testkit"))]
pub(crate) mod tests {
    use hookrelay_chat_interface::MockChatService;
    use hookrelay_config::Config;
    use hookrelay_templates::MockTemplateService;

    use crate::{CoreContext, CoreModule};

    #[allow(dead_code)]
    pub struct CoreContextTest {
        pub config: Config,
        pub core_module: CoreModule,
        pub chat_service: MockChatService,
        pub template_service: MockTemplateService,
    }

    impl CoreContextTest {
        #[allow(dead_code)]
        pub fn new() -> Self {
            Self {
                config: Config::default(),
                core_module: CoreModule::builder().build(),
                chat_service: MockChatService::new(),
                template_service: MockTemplateService::new(),
            }
        }

        #[allow(dead_code)]
        pub fn as_context(&self) -> CoreContext {
            CoreContext {
                config: &self.config,
                core_module: &self.core_module,
                chat_service: &self.chat_service,
                template_service: &self.template_service,
            }
        }
    }
}
