use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SpinnerProps {
    #[prop_or_default]
    pub label: Option<AttrValue>,
}

#[function_component(Spinner)]
pub fn spinner(props: &SpinnerProps) -> Html {
    html! {
        <div class="spinner-wrap" role="status">
            <div class="spinner"></div>
            if let Some(label) = &props.label {
                <span class="spinner-label">{label.clone()}</span>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SkeletonListProps {
    #[prop_or(3)]
    pub rows: usize,
}

#[function_component(SkeletonList)]
pub fn skeleton_list(props: &SkeletonListProps) -> Html {
    html! {
        <div class="skeleton-list">
            { for (0..props.rows).map(|_| html! { <div class="skeleton-row"></div> }) }
        </div>
    }
}
