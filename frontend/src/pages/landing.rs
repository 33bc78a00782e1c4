use yew::prelude::*;

use crate::components::chat_button::ChatButton;
use crate::components::fade_in::FadeIn;
use crate::components::nav_bar::NavBar;
use crate::config::{self, ScrollConfig, SITE_NAME};
use crate::navigation::hook::use_navigation;
use crate::navigation::section::SectionId;
use crate::pages::content::{SERVICES, STAGES, TECHNOLOGIES};

#[function_component(Landing)]
pub fn landing() -> Html {
    let navigation = use_navigation(ScrollConfig::default());

    let scroll_to_about = {
        let scroll_to = navigation.scroll_to.clone();
        Callback::from(move |_: MouseEvent| scroll_to.emit(SectionId::About))
    };

    html! {
        <div class="landing-page">
            <NavBar
                active={navigation.state.active_section}
                scrolled={navigation.state.is_scrolled}
                on_navigate={navigation.scroll_to.clone()}
            />

            <section id={SectionId::Hero.as_str()} class="hero">
                <div class="hero-background">
                    <img
                        src="https://images.unsplash.com/photo-1451187580459-43490279c0fa?auto=format&fit=crop&q=80"
                        alt="Background"
                    />
                </div>
                <div class="hero-content">
                    <div class="offer-badge">
                        <i class="gift-icon"></i>
                        <span>{"Special Offer: Up to 20% off on first projects!"}</span>
                    </div>
                    <h1 class="hero-title">{SITE_NAME}</h1>
                    <p class="hero-subtitle">{"Innovative Website Development for Your Business"}</p>
                    <FadeIn delay_ms={config::HERO_PROMISE_DELAY_MS} class={classes!("hero-promise")}>
                        {"No Upfront Payment – Pay Only When You're 100% Satisfied!"}
                    </FadeIn>
                    <div class="hero-cta-group">
                        <ChatButton label="Start Your Project" onclick={navigation.open_chat.clone()} />
                    </div>
                    <div class="nav-indicator" onclick={scroll_to_about}>
                        <i class="chevron-down-icon"></i>
                    </div>
                </div>
            </section>

            <section id={SectionId::About.as_str()} class="about">
                <div class="section-inner">
                    <h2>{"About Us"}</h2>
                    <div class="about-grid">
                        <div class="about-image">
                            <img
                                src="https://images.unsplash.com/photo-1553877522-43269d4ea984?auto=format&fit=crop&q=80"
                                alt="Team working"
                                loading="lazy"
                            />
                        </div>
                        <div class="about-text">
                            <p>
                                {"At TechCraft Studio, we transform digital ideas into powerful realities. With years of expertise in website and software development, we craft solutions that drive business growth and user engagement."}
                            </p>
                            <p>
                                {"Our team of passionate developers and designers work together to deliver exceptional digital experiences that stand out in today's competitive landscape."}
                            </p>
                            <div class="policy-card payment">
                                <div class="policy-header">
                                    <i class="credit-card-icon"></i>
                                    <h3>{"Client-First Payment Policy"}</h3>
                                </div>
                                <p>
                                    {"We believe in delivering value before expecting payment. Full payment is only required after project completion and client satisfaction is guaranteed."}
                                </p>
                            </div>
                            <div class="policy-card discounts">
                                <div class="policy-header">
                                    <i class="percent-icon"></i>
                                    <h3>{"Flexible Pricing & Discounts"}</h3>
                                </div>
                                <p>
                                    {"Enjoy discounts ranging from 10% to 40% based on project scope. Watch out for seasonal promotions and special offers throughout the year!"}
                                </p>
                            </div>
                        </div>
                    </div>
                </div>
            </section>

            <section id={SectionId::Services.as_str()} class="services">
                <div class="section-inner">
                    <h2>{"Our Services"}</h2>
                    <div class="services-grid">
                        { for SERVICES.iter().map(|service| html! {
                            <div class="service-card" key={service.title}>
                                <div class="service-icon"><i class={service.icon}></i></div>
                                <h3>{service.title}</h3>
                                <p>{service.description}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section id={SectionId::Process.as_str()} class="process">
                <div class="section-inner">
                    <h2>{"Our Development Process"}</h2>
                    <div class="stages-grid">
                        { for STAGES.iter().map(|stage| html! {
                            <div class="stage-card" key={stage.stage}>
                                <div class="stage-icon">
                                    <div class="stage-icon-backdrop"></div>
                                    <i class={stage.icon}></i>
                                </div>
                                <p class="stage-label">{stage.stage}</p>
                                <h3>{stage.title}</h3>
                                <p>{stage.description}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section id={SectionId::Technologies.as_str()} class="technologies">
                <div class="section-inner">
                    <h2>{"Technologies We Use"}</h2>
                    <div class="tech-grid">
                        { for TECHNOLOGIES.iter().map(|tech| html! {
                            <div class="tech-card" key={tech.name}>
                                <div class="tech-icon"><i class={tech.icon}></i></div>
                                <p>{tech.name}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section id={SectionId::Contact.as_str()} class="contact">
                <div class="section-inner narrow">
                    <div class="promo-badge">
                        <i class="gift-icon"></i>
                        <span>{"Current Promotion: Up to 40% off on selected projects!"}</span>
                    </div>
                    <h2>{"Let's discuss your project!"}</h2>
                    <p class="contact-subtitle">
                        {"Ready to transform your digital presence? Get in touch with us today."}
                    </p>
                    <div class="contact-policy">
                        <div class="policy-header">
                            <i class="credit-card-icon"></i>
                            <span>{"Satisfaction-First Payment Policy"}</span>
                        </div>
                        <p>{"Pay only after your project is completed and you're 100% satisfied"}</p>
                    </div>
                    <div>
                        <ChatButton label="Chat on WhatsApp" large={true} onclick={navigation.open_chat.clone()} />
                    </div>
                </div>
            </section>

            <footer class="site-footer">
                <p>{"© 2024 TechCraft Studio. All rights reserved."}</p>
            </footer>

            <style>
                {r#"
                    .landing-page {
                        min-height: 100vh;
                        background: #ffffff;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    }

                    .top-nav {
                        position: fixed;
                        width: 100%;
                        z-index: 50;
                        padding: 1rem 0;
                        background: transparent;
                        transition: all 0.3s ease;
                    }
                    .top-nav.scrolled {
                        background: #ffffff;
                        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                        padding: 0.5rem 0;
                    }
                    .nav-content {
                        max-width: 72rem;
                        margin: 0 auto;
                        padding: 0 1rem;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .nav-logo {
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: #ffffff;
                    }
                    .top-nav.scrolled .nav-logo {
                        color: #1e3a8a;
                    }
                    .nav-links {
                        display: flex;
                        gap: 1.5rem;
                    }
                    .nav-link {
                        background: none;
                        border: none;
                        cursor: pointer;
                        font-size: 1rem;
                        color: #ffffff;
                        transition: color 0.3s ease;
                    }
                    .top-nav.scrolled .nav-link {
                        color: #374151;
                    }
                    .nav-link:hover {
                        color: #3b82f6;
                    }
                    .nav-link.active {
                        font-weight: 700;
                    }

                    .hero {
                        position: relative;
                        height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: #ffffff;
                        background: linear-gradient(to bottom right, #1e3a8a, #1e40af, #1e3a8a);
                    }
                    .hero-background {
                        position: absolute;
                        inset: 0;
                    }
                    .hero-background img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        opacity: 0.2;
                    }
                    .hero-content {
                        position: relative;
                        z-index: 10;
                        text-align: center;
                        padding: 0 1rem;
                        max-width: 56rem;
                        margin: 0 auto;
                    }
                    .offer-badge {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.5rem 1.5rem;
                        margin-bottom: 1.5rem;
                        border-radius: 9999px;
                        background: rgba(30, 64, 175, 0.5);
                        color: #facc15;
                    }
                    .hero-title {
                        font-size: 4.5rem;
                        font-weight: 700;
                        margin-bottom: 1.5rem;
                        animation: float 3s ease-in-out infinite;
                    }
                    .hero-subtitle {
                        font-size: 1.5rem;
                        margin-bottom: 2rem;
                        color: #bfdbfe;
                    }
                    .hero-promise {
                        margin-bottom: 1rem;
                        font-size: 1.125rem;
                        font-weight: 500;
                        color: #ca8a04;
                    }
                    .fade-in {
                        opacity: 0;
                        transition: opacity 0.5s ease-in-out;
                    }
                    .fade-in.visible {
                        opacity: 1;
                    }
                    .nav-indicator {
                        position: absolute;
                        bottom: -8rem;
                        left: 50%;
                        transform: translateX(-50%);
                        cursor: pointer;
                        animation: bounce 2s infinite;
                    }
                    @keyframes float {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(-10px); }
                    }
                    @keyframes bounce {
                        0%, 100% { transform: translate(-50%, 0); }
                        50% { transform: translate(-50%, 10px); }
                    }

                    .cta-button {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.75rem 2rem;
                        border: none;
                        border-radius: 9999px;
                        background: #22c55e;
                        color: #ffffff;
                        font-size: 1.125rem;
                        font-weight: 600;
                        cursor: pointer;
                        transition: transform 0.3s ease, background 0.3s ease;
                    }
                    .cta-button:hover {
                        background: #16a34a;
                        transform: scale(1.05);
                    }
                    .cta-button.cta-large {
                        padding: 1rem 2.5rem;
                        font-size: 1.25rem;
                    }

                    .section-inner {
                        max-width: 72rem;
                        margin: 0 auto;
                        padding: 0 1rem;
                    }
                    .section-inner.narrow {
                        max-width: 56rem;
                        text-align: center;
                    }
                    .about, .services, .process, .technologies, .contact {
                        padding: 5rem 0;
                    }
                    .services, .technologies {
                        background: #f9fafb;
                    }
                    .about h2, .services h2, .process h2, .technologies h2 {
                        font-size: 2.25rem;
                        font-weight: 700;
                        text-align: center;
                        margin-bottom: 3rem;
                    }
                    .about-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        align-items: center;
                    }
                    .about-image img {
                        width: 100%;
                        border-radius: 0.5rem;
                        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15);
                        transition: transform 0.3s ease;
                    }
                    .about-image:hover img {
                        transform: scale(1.05);
                    }
                    .about-text p {
                        font-size: 1.125rem;
                        line-height: 1.75;
                        color: #374151;
                    }
                    .policy-card {
                        margin-top: 1.5rem;
                        padding: 1rem;
                        border-radius: 0.5rem;
                    }
                    .policy-card.payment {
                        background: #eff6ff;
                        border: 1px solid #dbeafe;
                    }
                    .policy-card.discounts {
                        background: #f0fdf4;
                        border: 1px solid #dcfce7;
                    }
                    .policy-header {
                        display: flex;
                        align-items: center;
                        justify-content: inherit;
                        gap: 0.75rem;
                        margin-bottom: 0.5rem;
                        font-weight: 600;
                    }

                    .services-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                    }
                    .service-card, .stage-card, .tech-card {
                        padding: 1.5rem;
                        border-radius: 0.75rem;
                        background: #ffffff;
                        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.07);
                        transition: transform 0.3s ease, box-shadow 0.3s ease;
                    }
                    .service-card:hover, .stage-card:hover, .tech-card:hover {
                        transform: translateY(-4px);
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    }
                    .service-card:hover h3 {
                        color: #2563eb;
                    }
                    .service-card p, .stage-card p {
                        color: #4b5563;
                    }

                    .stages-grid {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 2rem;
                    }
                    .stage-icon {
                        position: relative;
                        color: #2563eb;
                    }
                    .stage-icon-backdrop {
                        position: absolute;
                        top: -1rem;
                        left: -1rem;
                        width: 5rem;
                        height: 5rem;
                        border-radius: 9999px;
                        background: #dbeafe;
                        transition: transform 0.3s ease;
                    }
                    .stage-card:hover .stage-icon-backdrop {
                        transform: scale(1.1);
                    }
                    .stage-label {
                        margin-top: 1.5rem;
                        font-weight: 600;
                        color: #2563eb !important;
                    }

                    .tech-grid {
                        display: grid;
                        grid-template-columns: repeat(6, 1fr);
                        gap: 2rem;
                        text-align: center;
                    }
                    .tech-card p {
                        margin-top: 0.5rem;
                        font-weight: 600;
                    }

                    .contact {
                        background: #1e3a8a;
                        color: #ffffff;
                    }
                    .contact h2 {
                        font-size: 2.25rem;
                        font-weight: 700;
                        margin-bottom: 2rem;
                    }
                    .promo-badge {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 1rem;
                        margin-bottom: 2rem;
                        border-radius: 0.5rem;
                        background: rgba(250, 204, 21, 0.2);
                        color: #facc15;
                        font-weight: 600;
                    }
                    .contact-subtitle {
                        font-size: 1.25rem;
                        margin-bottom: 1rem;
                    }
                    .contact-policy {
                        display: inline-block;
                        padding: 1.5rem;
                        margin-bottom: 2rem;
                        border-radius: 0.5rem;
                        background: #1e40af;
                        justify-content: center;
                    }
                    .contact-policy p {
                        color: #dbeafe;
                    }

                    .site-footer {
                        padding: 2rem 1rem;
                        background: #111827;
                        color: #ffffff;
                        text-align: center;
                    }

                    @media (max-width: 1024px) {
                        .services-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                        .stages-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                        .tech-grid {
                            grid-template-columns: repeat(3, 1fr);
                        }
                    }
                    @media (max-width: 768px) {
                        .nav-links {
                            display: none;
                        }
                        .hero-title {
                            font-size: 3rem;
                        }
                        .hero-subtitle {
                            font-size: 1.25rem;
                        }
                        .about-grid, .services-grid, .stages-grid {
                            grid-template-columns: 1fr;
                        }
                        .tech-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }
                "#}
            </style>
        </div>
    }
}
