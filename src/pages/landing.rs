use yew::prelude::*;

use crate::components::request_form::RequestForm;
use crate::config;
use crate::lead::{FormMode, CONTENT_TYPES};

struct Feature {
    icon: &'static str,
    title: &'static str,
    blurb: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        icon: "fa-solid fa-bolt",
        title: "Lightning Fast",
        blurb: "Generate high-quality content in minutes, not hours. Our AI processes your requirements instantly.",
    },
    Feature {
        icon: "fa-solid fa-users",
        title: "Human Oversight",
        blurb: "Every piece of content is reviewed and refined by our expert team to ensure quality and brand alignment.",
    },
    Feature {
        icon: "fa-solid fa-shield-halved",
        title: "Brand Consistency",
        blurb: "Maintain your unique voice across all content with our advanced brand voice learning algorithms.",
    },
];

struct Tier {
    name: &'static str,
    price: &'static str,
    period: &'static str,
    highlighted: bool,
    perks: &'static [&'static str],
    cta: &'static str,
}

const TIERS: &[Tier] = &[
    Tier {
        name: "Starter",
        price: "$299",
        period: "per month",
        highlighted: false,
        perks: &[
            "Up to 20 pieces of content",
            "AI-powered generation",
            "Human review & editing",
            "48-hour turnaround",
        ],
        cta: "Get Started",
    },
    Tier {
        name: "Professional",
        price: "$799",
        period: "per month",
        highlighted: true,
        perks: &[
            "Up to 50 pieces of content",
            "Priority AI generation",
            "Expert human oversight",
            "24-hour turnaround",
            "Brand voice training",
        ],
        cta: "Get Started",
    },
    Tier {
        name: "Enterprise",
        price: "Custom",
        period: "contact us",
        highlighted: false,
        perks: &[
            "Unlimited content",
            "Dedicated AI models",
            "Dedicated account manager",
            "12-hour turnaround",
            "Custom integrations",
        ],
        cta: "Contact Sales",
    },
];

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="landing-page">
            <style>
                {r#"
                .landing-page {
                    color: #fff;
                    overflow-x: hidden;
                }
                .landing-page section {
                    padding: 5rem 2rem;
                    position: relative;
                    z-index: 1;
                }
                .landing-page .section-inner {
                    max-width: 1100px;
                    margin: 0 auto;
                    text-align: center;
                }
                .landing-page h2 {
                    font-size: 2.5rem;
                    margin-bottom: 1rem;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .landing-page .section-lead {
                    font-size: 1.2rem;
                    color: rgba(255, 255, 255, 0.75);
                    max-width: 700px;
                    margin: 0 auto 3rem;
                }

                .hero {
                    min-height: 80vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    padding: 8rem 2rem 4rem;
                }
                .hero-title {
                    font-size: 3.5rem;
                    margin-bottom: 1.5rem;
                    line-height: 1.15;
                }
                .hero-title span {
                    color: #7EB2FF;
                }
                .hero-subtitle {
                    font-size: 1.3rem;
                    color: rgba(255, 255, 255, 0.8);
                    max-width: 740px;
                    margin: 0 auto 2.5rem;
                }
                .hero-cta-group {
                    display: flex;
                    gap: 1rem;
                    justify-content: center;
                    flex-wrap: wrap;
                }
                .hero-cta {
                    padding: 1rem 2.5rem;
                    border-radius: 8px;
                    border: none;
                    font-size: 1.1rem;
                    cursor: pointer;
                    background: linear-gradient(45deg, #1E90FF, #7EB2FF);
                    color: #fff;
                }
                .hero-cta.secondary {
                    background: transparent;
                    border: 1px solid rgba(255, 255, 255, 0.3);
                }

                .feature-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }
                .feature-card {
                    background: rgba(30, 30, 30, 0.7);
                    border: 1px solid rgba(30, 144, 255, 0.15);
                    border-radius: 16px;
                    padding: 2.5rem 2rem;
                }
                .feature-card i {
                    font-size: 2.5rem;
                    color: #7EB2FF;
                    margin-bottom: 1.25rem;
                }
                .feature-card h3 {
                    font-size: 1.3rem;
                    margin-bottom: 0.75rem;
                }
                .feature-card p {
                    color: rgba(255, 255, 255, 0.7);
                    line-height: 1.6;
                }

                .services-section {
                    background: rgba(0, 0, 0, 0.25);
                }
                .service-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1.5rem;
                }
                .service-card {
                    background: rgba(30, 30, 30, 0.7);
                    border: 1px solid rgba(30, 144, 255, 0.1);
                    border-radius: 12px;
                    padding: 1.75rem 1rem;
                }
                .service-card i {
                    color: #32CD32;
                    font-size: 1.5rem;
                    margin-bottom: 0.75rem;
                }
                .service-card h3 {
                    font-size: 1rem;
                    margin: 0;
                }

                .pricing-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                    align-items: start;
                }
                .pricing-card {
                    background: rgba(30, 30, 30, 0.7);
                    border: 1px solid rgba(30, 144, 255, 0.15);
                    border-radius: 16px;
                    padding: 2.5rem 2rem;
                    position: relative;
                    text-align: left;
                }
                .pricing-card.highlighted {
                    border: 2px solid #1E90FF;
                }
                .popular-badge {
                    position: absolute;
                    top: -0.9rem;
                    left: 50%;
                    transform: translateX(-50%);
                    background: #1E90FF;
                    border-radius: 999px;
                    padding: 0.25rem 1rem;
                    font-size: 0.8rem;
                }
                .pricing-card .tier-name {
                    font-size: 1.5rem;
                    text-align: center;
                    margin-bottom: 0.5rem;
                }
                .pricing-card .tier-price {
                    font-size: 2.5rem;
                    color: #7EB2FF;
                    text-align: center;
                    margin: 0;
                }
                .pricing-card .tier-period {
                    color: rgba(255, 255, 255, 0.6);
                    text-align: center;
                    margin-bottom: 1.5rem;
                }
                .pricing-card ul {
                    list-style: none;
                    padding: 0;
                    margin: 0 0 2rem;
                }
                .pricing-card li {
                    display: flex;
                    align-items: center;
                    gap: 0.6rem;
                    margin-bottom: 0.75rem;
                    color: rgba(255, 255, 255, 0.85);
                }
                .pricing-card li i {
                    color: #32CD32;
                }
                .tier-cta {
                    width: 100%;
                    padding: 0.9rem;
                    border-radius: 8px;
                    border: none;
                    font-size: 1rem;
                    cursor: pointer;
                    background: linear-gradient(45deg, #1E90FF, #7EB2FF);
                    color: #fff;
                }
                .tier-cta.outline {
                    background: transparent;
                    border: 1px solid rgba(255, 255, 255, 0.3);
                }

                .contact-section {
                    background: rgba(0, 0, 0, 0.25);
                }

                .landing-footer {
                    background: rgba(0, 0, 0, 0.5);
                    padding: 3rem 2rem 2rem;
                }
                .footer-grid {
                    max-width: 1100px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 2fr 1fr 1fr 1fr;
                    gap: 2rem;
                    text-align: left;
                }
                .footer-grid h3 {
                    font-size: 1rem;
                    margin-bottom: 1rem;
                }
                .footer-grid ul {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                }
                .footer-grid li {
                    color: rgba(255, 255, 255, 0.55);
                    margin-bottom: 0.5rem;
                }
                .footer-brand {
                    color: rgba(255, 255, 255, 0.55);
                    line-height: 1.6;
                }
                .footer-logo {
                    font-size: 1.2rem;
                    font-weight: bold;
                    margin-bottom: 1rem;
                }
                .footer-logo i {
                    color: #7EB2FF;
                    margin-right: 0.5rem;
                }
                .footer-bottom {
                    max-width: 1100px;
                    margin: 2rem auto 0;
                    padding-top: 1.5rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    text-align: center;
                    color: rgba(255, 255, 255, 0.45);
                }

                @media (max-width: 968px) {
                    .service-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                @media (max-width: 768px) {
                    .hero-title {
                        font-size: 2.4rem;
                    }
                    .feature-grid,
                    .pricing-grid {
                        grid-template-columns: 1fr;
                    }
                    .footer-grid {
                        grid-template-columns: 1fr 1fr;
                    }
                    .landing-page section {
                        padding: 3rem 1rem;
                    }
                }
                @media (max-width: 480px) {
                    .service-grid,
                    .footer-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>

            <header class="hero">
                <div class="section-inner">
                    <h1 class="hero-title">
                        {"AI-Powered Content Creation"}
                        <span>{" Made Simple"}</span>
                    </h1>
                    <p class="hero-subtitle">
                        {"Transform your content strategy with our hybrid AI-human approach. \
                          Get high-quality, engaging content that drives results while \
                          maintaining your brand voice."}
                    </p>
                    <div class="hero-cta-group">
                        <a href="#contact"><button class="hero-cta">{"Start Creating Content"}</button></a>
                        <a href="#services"><button class="hero-cta secondary">{"View Samples"}</button></a>
                    </div>
                </div>
            </header>

            <section id="features">
                <div class="section-inner">
                    <h2>{"Why Choose ContentGenius AI?"}</h2>
                    <p class="section-lead">
                        {"Our platform combines cutting-edge AI technology with human expertise \
                          to deliver content that truly resonates with your audience."}
                    </p>
                    <div class="feature-grid">
                        {
                            FEATURES.iter().map(|feature| html! {
                                <div class="feature-card">
                                    <i class={feature.icon}></i>
                                    <h3>{feature.title}</h3>
                                    <p>{feature.blurb}</p>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            <section id="services" class="services-section">
                <div class="section-inner">
                    <h2>{"Content Services"}</h2>
                    <p class="section-lead">
                        {"From blog posts to social media, we've got all your content needs covered."}
                    </p>
                    <div class="service-grid">
                        {
                            CONTENT_TYPES.iter().map(|service| html! {
                                <div class="service-card">
                                    <i class="fa-solid fa-circle-check"></i>
                                    <h3>{*service}</h3>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            <section id="pricing">
                <div class="section-inner">
                    <h2>{"Simple, Transparent Pricing"}</h2>
                    <p class="section-lead">
                        {"Choose the plan that fits your content needs and budget."}
                    </p>
                    <div class="pricing-grid">
                        {
                            TIERS.iter().map(|tier| html! {
                                <div class={classes!("pricing-card", tier.highlighted.then_some("highlighted"))}>
                                    {
                                        if tier.highlighted {
                                            html! { <div class="popular-badge">{"Most Popular"}</div> }
                                        } else {
                                            html! {}
                                        }
                                    }
                                    <h3 class="tier-name">{tier.name}</h3>
                                    <p class="tier-price">{tier.price}</p>
                                    <p class="tier-period">{tier.period}</p>
                                    <ul>
                                        {
                                            tier.perks.iter().map(|perk| html! {
                                                <li><i class="fa-solid fa-circle-check"></i>{*perk}</li>
                                            }).collect::<Html>()
                                        }
                                    </ul>
                                    <a href="#contact">
                                        <button class={classes!("tier-cta", (!tier.highlighted).then_some("outline"))}>
                                            {tier.cta}
                                        </button>
                                    </a>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            <section id="contact" class="contact-section">
                <div class="section-inner">
                    <h2>{"Ready to Get Started?"}</h2>
                    <p class="section-lead">
                        {"Submit your first content request and experience the ContentGenius AI difference."}
                    </p>
                    <RequestForm
                        mode={if config::PREVIEW_ONLY { FormMode::Preview } else { FormMode::Backend }}
                    />
                </div>
            </section>

            <footer class="landing-footer">
                <div class="footer-grid">
                    <div>
                        <div class="footer-logo">
                            <i class="fa-solid fa-bolt"></i>
                            {"ContentGenius AI"}
                        </div>
                        <p class="footer-brand">
                            {"AI-powered content creation with human expertise for exceptional results."}
                        </p>
                    </div>
                    <div>
                        <h3>{"Services"}</h3>
                        <ul>
                            <li>{"Blog Writing"}</li>
                            <li>{"Social Media"}</li>
                            <li>{"Email Marketing"}</li>
                            <li>{"Website Copy"}</li>
                        </ul>
                    </div>
                    <div>
                        <h3>{"Company"}</h3>
                        <ul>
                            <li>{"About Us"}</li>
                            <li>{"Careers"}</li>
                            <li>{"Contact"}</li>
                            <li>{"Privacy Policy"}</li>
                        </ul>
                    </div>
                    <div>
                        <h3>{"Connect"}</h3>
                        <ul>
                            <li>{"Twitter"}</li>
                            <li>{"LinkedIn"}</li>
                            <li>{"Facebook"}</li>
                            <li>{"Instagram"}</li>
                        </ul>
                    </div>
                </div>
                <div class="footer-bottom">
                    <p>{"© 2025 ContentGenius AI. All rights reserved."}</p>
                </div>
            </footer>
        </div>
    }
}
