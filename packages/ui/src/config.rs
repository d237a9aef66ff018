use dioxus::prelude::*;
use store::ClientConfig;

/// Make the client configuration available to every descendant.
#[component]
pub fn ConfigProvider(config: ClientConfig, children: Element) -> Element {
    use_context_provider(|| config.clone());

    rsx! {
        {children}
    }
}

pub fn use_config() -> ClientConfig {
    use_context::<ClientConfig>()
}
