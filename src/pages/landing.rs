use yew::prelude::*;

use crate::components::contact::ContactForm;
use crate::components::counter::Counter;
use crate::components::cursor_glow::CtaSection;
use crate::components::navbar::{Nav, NavLink};
use crate::components::parallax::HeroBackground;
use crate::components::reveal::Reveal;
use crate::components::subscribe::SubscribeForm;
use crate::config::use_landing_config;
use crate::smooth_scroll::use_smooth_scroll;

const NAV_LINKS: [NavLink; 4] = [
    NavLink { href: "#features", label: "Features" },
    NavLink { href: "#stats", label: "Results" },
    NavLink { href: "#subscribe", label: "Early Access" },
    NavLink { href: "#contact", label: "Contact" },
];

struct Feature {
    icon: &'static str,
    title: &'static str,
    body: &'static str,
}

const FEATURES: [Feature; 6] = [
    Feature {
        icon: "⚡",
        title: "Instant Sync",
        body: "Changes land on every device the moment they happen. No refresh, no waiting.",
    },
    Feature {
        icon: "🔒",
        title: "Private by Default",
        body: "End-to-end encryption on everything you store, with keys that never leave your hands.",
    },
    Feature {
        icon: "🧭",
        title: "Smart Workflows",
        body: "Automations that learn the way your team works and quietly handle the busywork.",
    },
    Feature {
        icon: "📊",
        title: "Live Insights",
        body: "Dashboards that update in real time so decisions are made on today's numbers.",
    },
    Feature {
        icon: "🔌",
        title: "Open Integrations",
        body: "Connect the tools you already use through a clean, documented API.",
    },
    Feature {
        icon: "🌍",
        title: "Global Edge",
        body: "Served from regions close to your users for fast responses anywhere.",
    },
];

struct Stat {
    target: u64,
    suffix: &'static str,
    label: &'static str,
}

const STATS: [Stat; 4] = [
    Stat { target: 50000, suffix: "+", label: "Active teams" },
    Stat { target: 99, suffix: "%", label: "Uptime last year" },
    Stat { target: 1200000, suffix: "", label: "Tasks automated" },
    Stat { target: 140, suffix: "", label: "Countries served" },
];

#[function_component(Landing)]
pub fn landing() -> Html {
    let config = use_landing_config();
    use_smooth_scroll(config.scroll_margin);

    html! {
        <div class="landing-page">
            <Nav links={NAV_LINKS.to_vec()} />

            <header class="hero">
                <HeroBackground />
                <div class="container hero-content">
                    <span class="hero-badge">{"Now in private beta"}</span>
                    <h1 class="hero-title">
                        {"Work that moves "}
                        <span class="gradient-text">{"at the speed of thought"}</span>
                    </h1>
                    <p class="hero-subtitle">
                        {"Nexus brings your projects, people and data into one fast workspace so your team can focus on the work that matters."}
                    </p>
                    <div class="hero-cta-group">
                        <a href="#subscribe" class="btn btn-primary">{"Get Early Access"}</a>
                        <a href="#features" class="btn btn-ghost">{"See Features"}</a>
                    </div>
                    <img class="hero-mockup" src="images/product-mockup.jpg" alt="Nexus dashboard" />
                </div>
            </header>

            <section id="features" class="features">
                <div class="container">
                    <Reveal class="section-header">
                        <h2>{"Everything your team needs"}</h2>
                        <p>{"One workspace, built for speed from the ground up."}</p>
                    </Reveal>
                    <div class="features-grid">
                        { for FEATURES.iter().map(|feature| html! {
                            <Reveal class="feature-card">
                                <div class="feature-icon">{ feature.icon }</div>
                                <h3>{ feature.title }</h3>
                                <p>{ feature.body }</p>
                            </Reveal>
                        }) }
                    </div>
                </div>
            </section>

            <section id="stats" class="stats">
                <div class="container stats-grid">
                    { for STATS.iter().map(|stat| html! {
                        <Reveal class="stat">
                            <Counter target={stat.target} suffix={stat.suffix} />
                            <span class="stat-label">{ stat.label }</span>
                        </Reveal>
                    }) }
                </div>
            </section>

            <CtaSection>
                <Reveal class="cta-copy">
                    <h2>{"Be first in line"}</h2>
                    <p>{"Join the waitlist and we'll send your invite as soon as a seat opens up."}</p>
                </Reveal>
                <SubscribeForm />
            </CtaSection>

            <section id="contact" class="contact">
                <div class="container contact-grid">
                    <Reveal class="contact-copy">
                        <h2>{"Talk to us"}</h2>
                        <p>{"Questions about plans, security or migrating your team? We usually reply within a day."}</p>
                    </Reveal>
                    <Reveal class="contact-card">
                        <ContactForm />
                    </Reveal>
                </div>
            </section>

            <footer class="footer">
                <div class="container footer-content">
                    <a href="#" class="nav-logo">
                        <span class="logo-mark">{"◆"}</span>
                        {"Nexus"}
                    </a>
                    <p class="footer-copy">{"© 2026 Nexus. All rights reserved."}</p>
                </div>
            </footer>
        </div>
    }
}
