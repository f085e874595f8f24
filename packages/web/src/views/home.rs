//! Public landing page.

use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant};

use crate::Route;

/// Landing page: navigation bar, hero, feature grid and footer.
#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "landing",
            Navigation {}
            Hero {}
            Features {}
            Footer {}
        }
    }
}

#[component]
fn Navigation() -> Element {
    let nav = use_navigator();

    rsx! {
        nav { class: "landing-nav",
            div { class: "landing-nav-inner",
                div { class: "brand",
                    div { class: "brand-mark", span { "🐱" } }
                    span { class: "brand-name text-gradient", "CatmanAI" }
                }
                div { class: "landing-nav-links",
                    a { href: "#courses", "AI課程" }
                    a { href: "#tools", "工具推薦" }
                    a { href: "#community", "社群" }
                    a { href: "#about", "關於我們" }
                }
                div { class: "landing-nav-actions",
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| {
                            nav.push(Route::Auth {});
                        },
                        "登入"
                    }
                    Button {
                        class: "btn-hero",
                        onclick: move |_| {
                            nav.push(Route::Auth {});
                        },
                        "開始免費試用"
                    }
                }
            }
        }
    }
}

#[component]
fn Hero() -> Element {
    let nav = use_navigator();

    rsx! {
        section { class: "hero",
            div { class: "hero-inner",
                div { class: "hero-copy",
                    h1 { class: "hero-title",
                        span { class: "text-gradient", "CatmanAI" }
                        br {}
                        span { "教你善用" }
                        br {}
                        span { class: "hero-accent", "人工智能" }
                    }
                    p { class: "hero-tagline",
                        "跟著Catman一起探索AI的無限可能，從零開始學會如何運用人工智能工具來提升你的工作效率和創造力"
                    }
                    div { class: "hero-actions",
                        Button {
                            class: "btn-hero",
                            onclick: move |_| {
                                nav.push(Route::Auth {});
                            },
                            "🚀 開始學習之旅"
                        }
                        Button {
                            class: "btn-ai",
                            onclick: move |_| {
                                nav.push(Route::Auth {});
                            },
                            "🤖 探索AI工具"
                        }
                    }
                    div { class: "hero-tags",
                        span { class: "hero-tag", "💡 實用教學" }
                        span { class: "hero-tag", "🎯 步驟詳細" }
                        span { class: "hero-tag", "🔥 最新趨勢" }
                    }
                }
                div { class: "hero-figure",
                    div { class: "hero-figure-glow" }
                    div { class: "hero-figure-card", span { class: "hero-cat", "🐱" } }
                }
            }
        }
    }
}

struct FeatureCard {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURE_CARDS: [FeatureCard; 6] = [
    FeatureCard {
        icon: "🎓",
        title: "系統化課程",
        description: "從基礎到進階，循序漸進學會使用各種AI工具，包括ChatGPT、Midjourney、Claude等熱門應用",
    },
    FeatureCard {
        icon: "💼",
        title: "實戰案例",
        description: "真實工作場景應用，學會如何用AI提升工作效率，包括文案寫作、圖片設計、數據分析等",
    },
    FeatureCard {
        icon: "🚀",
        title: "最新趨勢",
        description: "緊跟AI發展前沿，第一時間分享最新工具和技巧，讓你始終保持競爭優勢",
    },
    FeatureCard {
        icon: "👥",
        title: "社群交流",
        description: "加入活躍的學習社群，與同樣熱愛AI的夥伴交流心得，互相學習成長",
    },
    FeatureCard {
        icon: "📱",
        title: "隨時學習",
        description: "支援手機、平板、電腦多平台學習，隨時隨地都能提升你的AI技能",
    },
    FeatureCard {
        icon: "🎯",
        title: "個人化指導",
        description: "根據你的需求和程度，提供客製化學習建議和專業指導",
    },
];

#[component]
fn Features() -> Element {
    let nav = use_navigator();

    rsx! {
        section { class: "features",
            div { class: "features-heading",
                h2 {
                    "為什麼選擇 "
                    span { class: "text-gradient", "CatmanAI" }
                    "？"
                }
                p { "我們不只是教你使用AI工具，更重要的是培養你的AI思維，讓你能夠靈活運用各種AI技術解決實際問題" }
            }
            div { class: "features-grid",
                for card in FEATURE_CARDS.iter() {
                    div { class: "card-glow feature-card",
                        div { class: "feature-icon", "{card.icon}" }
                        h3 { "{card.title}" }
                        p { "{card.description}" }
                    }
                }
            }
            div { class: "features-cta card-glow",
                h3 { class: "text-gradient", "準備好開始你的AI學習之旅了嗎？" }
                p { "立即註冊，獲得專屬學習資源和社群會員資格" }
                Button {
                    class: "btn-hero",
                    onclick: move |_| {
                        nav.push(Route::Auth {});
                    },
                    "🎉 立即免費註冊"
                }
            }
        }
    }
}

#[component]
fn Footer() -> Element {
    rsx! {
        footer { class: "landing-footer",
            div { class: "footer-inner",
                div { class: "footer-about",
                    div { class: "brand",
                        div { class: "brand-mark", span { "🐱" } }
                        span { class: "brand-name text-gradient", "CatmanAI" }
                    }
                    p {
                        "專業的AI教學平台，幫助你掌握人工智能的力量，提升工作效率和創造力。跟著Catman一起探索AI的無限可能！"
                    }
                    div { class: "footer-social",
                        a { href: "#", "📧" }
                        a { href: "#", "💬" }
                        a { href: "#", "📱" }
                    }
                }
                div { class: "footer-links",
                    h4 { "學習資源" }
                    ul {
                        li { a { href: "#", "AI基礎課程" } }
                        li { a { href: "#", "進階技巧" } }
                        li { a { href: "#", "工具指南" } }
                        li { a { href: "#", "實戰案例" } }
                    }
                }
                div { class: "footer-links",
                    h4 { "支援" }
                    ul {
                        li { a { href: "#", "常見問題" } }
                        li { a { href: "#", "聯絡我們" } }
                        li { a { href: "#", "社群支援" } }
                        li { a { href: "#", "意見回饋" } }
                    }
                }
            }
            div { class: "footer-bottom",
                p { "© 2024 CatmanAI. 版權所有 | 讓AI成為你最好的夥伴 🐱✨" }
            }
        }
    }
}
