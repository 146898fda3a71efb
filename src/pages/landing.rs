use yew::prelude::*;
use log::{debug, warn};

use crate::behavior::controller::PageBehavior;

struct Service {
    title: &'static str,
    blurb: &'static str,
}

const SERVICES: [Service; 4] = [
    Service { title: "Brand Strategy", blurb: "Positioning and messaging that makes your product easy to pick." },
    Service { title: "Web Design", blurb: "Fast, accessible marketing sites built to convert." },
    Service { title: "Product Engineering", blurb: "From prototype to production with a small senior team." },
    Service { title: "Growth Analytics", blurb: "Dashboards and experiments that tell you what actually works." },
];

const STATS: [(&str, &str); 4] = [
    ("150+", "Projects shipped"),
    ("98%", "Client retention"),
    ("12", "Countries"),
    ("40k", "Hours of craft"),
];

const VALUES: [(&str, &str); 3] = [
    ("Small teams", "Every project is run by the people doing the work."),
    ("Plain pricing", "Fixed quotes, no surprise invoices."),
    ("Long tail support", "We stick around after launch."),
];

const TEAM: [(&str, &str, &str); 3] = [
    ("Mira Okafor", "Design Lead", "/assets/team/mira.jpg"),
    ("Jonas Lindqvist", "Engineering", "/assets/team/jonas.jpg"),
    ("Priya Raman", "Strategy", "/assets/team/priya.jpg"),
];

const JOBS: [(&str, &str); 2] = [
    ("Senior Frontend Engineer", "Remote, Europe"),
    ("Product Designer", "Helsinki or remote"),
];

const NAV_LINKS: [(&str, &str); 6] = [
    ("#home", "Home"),
    ("#about", "About"),
    ("#services", "Services"),
    ("#team", "Team"),
    ("#careers", "Careers"),
    ("#contact", "Contact"),
];

#[function_component(Landing)]
pub fn landing() -> Html {
    // Page behaviors live exactly as long as the landing page is mounted
    use_effect_with_deps(
        move |_| {
            let behavior = match PageBehavior::attach_to_page() {
                Ok(behavior) => {
                    debug!("landing behaviors ready ({} listeners)", behavior.listener_count());
                    Some(behavior)
                }
                Err(e) => {
                    warn!("landing behaviors unavailable: {}", e);
                    None
                }
            };
            move || drop(behavior)
        },
        (),
    );

    html! {
        <>
            <nav id="navbar" class="navbar">
                <div class="nav-container">
                    <a href="#home" class="nav-logo">{"Northwind Studio"}</a>
                    <ul id="nav-menu" class="nav-menu">
                        {
                            NAV_LINKS.iter().map(|(href, label)| html! {
                                <li class="nav-item">
                                    <a href={*href} class="nav-link">{*label}</a>
                                </li>
                            }).collect::<Html>()
                        }
                    </ul>
                    <button id="hamburger" class="hamburger" aria-label="Toggle navigation">
                        <span class="bar"></span>
                        <span class="bar"></span>
                        <span class="bar"></span>
                    </button>
                </div>
            </nav>

            <main>
                <section id="home" class="hero">
                    <div class="hero-content">
                        <h1>{"Websites that earn their keep"}</h1>
                        <p>{"We design and build marketing sites for teams that would rather be shipping product."}</p>
                        <a href="#contact" class="btn btn-primary">{"Start a project"}</a>
                    </div>
                    <div class="hero-stats">
                        {
                            STATS.iter().map(|(value, label)| html! {
                                <div class="stat">
                                    <h3>{*value}</h3>
                                    <p>{*label}</p>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </section>

                <section id="about" class="about">
                    <h2>{"About us"}</h2>
                    <div class="value-grid">
                        {
                            VALUES.iter().map(|(title, text)| html! {
                                <div class="value-prop">
                                    <h3>{*title}</h3>
                                    <p>{*text}</p>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                    <div class="story-card">
                        <h3>{"Our story"}</h3>
                        <p>{"Started in a borrowed office in 2014, still answering our own email."}</p>
                    </div>
                </section>

                <section id="services" class="services">
                    <h2>{"Services"}</h2>
                    <div class="services-grid">
                        {
                            SERVICES.iter().map(|service| html! {
                                <div class="service-card">
                                    <h3>{service.title}</h3>
                                    <p>{service.blurb}</p>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                    <div class="system-card">
                        <h3>{"How we work"}</h3>
                        <p>{"Two week cycles, a shared board, and a demo every Friday."}</p>
                    </div>
                </section>

                <section id="team" class="team">
                    <h2>{"Team"}</h2>
                    <div class="team-grid">
                        {
                            TEAM.iter().map(|(name, role, photo)| html! {
                                <div class="team-member">
                                    <img
                                        class="lazy"
                                        src="/assets/placeholder.svg"
                                        data-src={*photo}
                                        alt={*name}
                                    />
                                    <h3>{*name}</h3>
                                    <p>{*role}</p>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                    <blockquote class="testimonial">
                        <p>{"\"They rebuilt our site in six weeks and sign-ups doubled.\""}</p>
                        <cite>{"Head of Growth, Fjord Freight"}</cite>
                    </blockquote>
                </section>

                <section id="careers" class="careers">
                    <h2>{"Careers"}</h2>
                    {
                        JOBS.iter().map(|(title, location)| html! {
                            <div class="job-card">
                                <h3>{*title}</h3>
                                <p>{*location}</p>
                                <a href="#contact" class="btn">{"Get in touch"}</a>
                            </div>
                        }).collect::<Html>()
                    }
                </section>

                <section id="contact" class="contact">
                    <h2>{"Contact"}</h2>
                    <div class="contact-card">
                        <p>{"hello@northwind.studio"}</p>
                        <p>{"Annankatu 12, Helsinki"}</p>
                    </div>
                    <form class="contact-form" novalidate={true}>
                        <input type="text" name="name" placeholder="Your name" required={true} />
                        <input type="email" name="email" placeholder="Email" required={true} />
                        <input type="text" name="company" placeholder="Company (optional)" />
                        <textarea name="message" rows="5" placeholder="Tell us about your project" required={true}></textarea>
                        <button type="submit" class="btn btn-primary">{"Send message"}</button>
                    </form>
                </section>
            </main>

            <footer class="footer">
                <p>{"© 2026 Northwind Studio"}</p>
            </footer>
        </>
    }
}
