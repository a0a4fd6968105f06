use dioxus::prelude::*;

const SERVER_ADDRESS: &str = "110.42.59.52";
const ONLINE_PLAYERS: u32 = 42;

struct InfoCard {
    title: &'static str,
    content: &'static str,
    area: &'static str,
}

const INFO_CARDS: &[InfoCard] = &[
    InfoCard {
        title: "服务器IP",
        content: SERVER_ADDRESS,
        area: "ip",
    },
    InfoCard {
        title: "游戏版本",
        content: "1.21.1",
        area: "version",
    },
    InfoCard {
        title: "服务器介绍",
        content: "欢迎来到JBpotato我的世界服务器！我们提供优质的游戏体验，拥有友好的社区氛围和完善的插件系统。无论您是建筑师、冒险家还是红石工程师，这里都能让您找到归属感！",
        area: "desc",
    },
];

const GALLERY: &[(&str, &str)] = &[
    ("/images/server1.jpg", "服务器风景1"),
    ("/images/server2.jpg", "服务器风景2"),
    ("/images/server3.jpg", "服务器风景3"),
];

#[component]
pub fn ServerInfo() -> Element {
    rsx! {
        header { class: "hero",
            h1 { "JBpotato Minecraft Server" }
            p { "探索、创造、冒险，尽在我们的服务器" }
        }
        section { class: "section",
            h2 { class: "section-title", "服务器信息" }
            div { class: "card-grid",
                for card in INFO_CARDS.iter() {
                    div {
                        key: "{card.area}",
                        class: "card info-card",
                        style: "grid-area: {card.area}",
                        h3 { class: "card-title", "{card.title}" }
                        p { class: "card-content", "{card.content}" }
                        if card.area == "ip" && cfg!(feature = "desktop") {
                            CopyAddressButton {}
                        }
                    }
                }
                div { class: "card online-card",
                    div { class: "online-count", "{ONLINE_PLAYERS}" }
                    div { class: "online-label", "在线玩家" }
                }
            }
            div { class: "image-grid",
                for (src, alt) in GALLERY.iter() {
                    div { key: "{src}", class: "card image-card",
                        img { src: *src, alt: *alt }
                    }
                }
            }
        }
    }
}

#[component]
fn CopyAddressButton() -> Element {
    let mut copied = use_signal(|| false);
    let label = if copied() { "已复制" } else { "复制地址" };
    rsx! {
        button {
            class: "copy-button",
            r#type: "button",
            onclick: move |_| copied.set(copy_to_clipboard(SERVER_ADDRESS)),
            "{label}"
        }
    }
}

fn copy_to_clipboard(text: &str) -> bool {
    #[cfg(feature = "desktop")]
    {
        match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text)) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(error = %err, "failed to copy server address");
                false
            }
        }
    }
    #[cfg(not(feature = "desktop"))]
    {
        let _ = text;
        false
    }
}
