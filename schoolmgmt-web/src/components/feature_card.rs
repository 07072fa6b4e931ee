use yew::{Html, Properties, function_component, html};
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    pub icon: IconId,
    pub title: &'static str,
    pub description: &'static str,
}

/// A landing-page feature tile. Reveal styling is applied by the page.
#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    html! {
        <div class="feature-card">
            <div class="feature-icon">
                <Icon icon_id={props.icon} class="w-8 h-8" />
            </div>
            <h3>{ props.title }</h3>
            <p>{ props.description }</p>
        </div>
    }
}
