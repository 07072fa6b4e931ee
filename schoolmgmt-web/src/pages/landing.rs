use yew::{Callback, Html, MouseEvent, function_component, html, use_node_ref};
use yew_icons::IconId;
use yewdux::prelude::use_dispatch;

use crate::{
    components::FeatureCard,
    config::FrontendConfig,
    dom,
    interactions::{report, scroll_to_section, use_card_reveal},
    models::app_state::LoginModalState,
};

pub const DEMO_ALERT: &str =
    "Demo feature coming soon! This will showcase the system capabilities.";

const FEATURES: [(IconId, &str, &str); 6] = [
    (
        IconId::HeroiconsOutlineUserGroup,
        "Student Management",
        "Admissions, class allocation and complete student records in one place.",
    ),
    (
        IconId::HeroiconsOutlineAcademicCap,
        "Teacher Portal",
        "Class schedules, attendance registers and grading for every teacher.",
    ),
    (
        IconId::HeroiconsOutlineCalendarDays,
        "Attendance & Calendar",
        "Daily attendance, holidays and school events on a shared calendar.",
    ),
    (
        IconId::HeroiconsOutlineChartPie,
        "Analytics",
        "Enrollment, gender and category breakdowns at a glance.",
    ),
    (
        IconId::HeroiconsOutlineShieldCheck,
        "Role-Based Access",
        "Separate dashboards for administrators, teachers, students and parents.",
    ),
    (
        IconId::HeroiconsOutlineDevicePhoneMobile,
        "Mobile Ready",
        "Every screen works on phones and tablets.",
    ),
];

/// Public landing page.
#[function_component(LandingPage)]
pub fn landing_page() -> Html {
    let config = FrontendConfig::shared();
    let features_ref = use_node_ref();
    use_card_reveal(features_ref.clone(), config.interaction.cards.clone());

    let dispatch = use_dispatch::<LoginModalState>();
    let get_started = dispatch.reduce_mut_callback(|state: &mut LoginModalState| state.open());
    let explore = Callback::from(|_: MouseEvent| {
        if let Err(err) = scroll_to_section("features") {
            report("explore features", &err);
        }
    });
    let demo = Callback::from(|_: MouseEvent| dom::alert(DEMO_ALERT));

    html! {
        <>
            <section id="home" class="hero">
                <div class="hero-content">
                    <h1>{ "Manage your school with confidence" }</h1>
                    <p>{ "Students, teachers, parents and administrators on one simple platform." }</p>
                    <div class="hero-buttons">
                        <button class="btn btn-primary" onclick={get_started}>{ "Get Started" }</button>
                        <button class="btn btn-secondary" onclick={explore}>{ "Explore Features" }</button>
                        <button class="btn btn-outline" onclick={demo}>{ "Watch Demo" }</button>
                    </div>
                </div>
            </section>

            <section id="features" class="features" ref={features_ref}>
                <div class="container">
                    <h2 class="section-title">{ "Features" }</h2>
                    <div class="features-grid">
                        { for FEATURES.iter().map(|(icon, title, description)| html! {
                            <FeatureCard icon={*icon} title={*title} description={*description} />
                        }) }
                    </div>
                </div>
            </section>

            <section id="about" class="about">
                <div class="container">
                    <h2 class="section-title">{ "About" }</h2>
                    <p>{ "SchoolMgmt brings day-to-day school administration into a single dashboard for every role." }</p>
                </div>
            </section>

            <section id="contact" class="contact">
                <div class="container">
                    <h2 class="section-title">{ "Contact" }</h2>
                    <p>{ "Questions? Write to info@schoolmgmt.example." }</p>
                </div>
            </section>
        </>
    }
}
