use yew::prelude::*;

/// Pestaña: (valor, etiqueta)
pub type TabItem = (&'static str, &'static str);

#[derive(Properties, PartialEq)]
pub struct TabsProps {
    pub items: &'static [TabItem],
    pub active: AttrValue,
    pub on_select: Callback<&'static str>,
}

/// Barra de pestañas; el contenido lo pinta el padre según `active`
#[function_component(Tabs)]
pub fn tabs(props: &TabsProps) -> Html {
    html! {
        <div class="tabs-list" role="tablist">
            { for props.items.iter().map(|(value, label)| {
                let value = *value;
                let selected = props.active.as_str() == value;
                let onclick = {
                    let cb = props.on_select.clone();
                    Callback::from(move |_e: MouseEvent| cb.emit(value))
                };
                html! {
                    <button
                        key={value.to_string()}
                        role="tab"
                        aria-selected={selected.to_string()}
                        class={if selected { "tab-trigger active" } else { "tab-trigger" }}
                        {onclick}
                    >{*label}</button>
                }
            })}
        </div>
    }
}
