use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ConfirmDialogProps {
    pub open: bool,
    pub title: AttrValue,
    pub description: AttrValue,
    pub confirm_label: AttrValue,
    #[prop_or(AttrValue::from("Cancel"))]
    pub cancel_label: AttrValue,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component(ConfirmDialog)]
pub fn confirm_dialog(props: &ConfirmDialogProps) -> Html {
    if !props.open {
        return html! {};
    }

    html! {
        <div class="dialog-backdrop">
            <div class="dialog" role="alertdialog" aria-modal="true">
                <h2 class="dialog-title">{props.title.clone()}</h2>
                <p class="dialog-description">{props.description.clone()}</p>
                <div class="dialog-actions">
                    <button class="btn-secondary" onclick={props.on_cancel.reform(|_| ())}>
                        {props.cancel_label.clone()}
                    </button>
                    <button class="btn-danger" onclick={props.on_confirm.reform(|_| ())}>
                        {props.confirm_label.clone()}
                    </button>
                </div>
            </div>
        </div>
    }
}
