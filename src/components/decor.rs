//! Purely decorative pieces: the data-distribution bars and the blurred
//! floating circles behind the page.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DataBarProps {
    /// Bar height as a percentage of the card's bar area.
    pub height: u32,
    pub delay: &'static str,
    pub color: &'static str,
}

#[function_component(DataBar)]
pub fn data_bar(props: &DataBarProps) -> Html {
    html! {
        <div
            class="data-bar bar-grow"
            style={format!(
                "height: {}%; animation-delay: {}; background: {};",
                props.height, props.delay, props.color
            )}
        />
    }
}

#[derive(Properties, PartialEq)]
pub struct FloatingCircleProps {
    pub size: &'static str,
    pub top: &'static str,
    pub left: &'static str,
    pub delay: &'static str,
    pub color: &'static str,
}

#[function_component(FloatingCircle)]
pub fn floating_circle(props: &FloatingCircleProps) -> Html {
    html! {
        <div
            class="floating-circle"
            style={format!(
                "width: {s}; height: {s}; top: {}; left: {}; animation-delay: {}; background: {};",
                props.top, props.left, props.delay, props.color, s = props.size,
            )}
        />
    }
}
