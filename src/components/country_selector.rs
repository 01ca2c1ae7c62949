use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CountrySelectorProps {
    pub countries: &'static [&'static str],
    /// Current value; `None` shows the placeholder option.
    #[prop_or_default]
    pub selected: Option<String>,
    pub on_change: Callback<String>,
    #[prop_or(AttrValue::Static("Select a country"))]
    pub label: AttrValue,
}

/// Country selector dropdown component
#[function_component(CountrySelector)]
pub fn country_selector(props: &CountrySelectorProps) -> Html {
    let on_change = {
        let callback = props.on_change.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            let value = target.value();
            if !value.is_empty() {
                callback.emit(value);
            }
        })
    };

    html! {
        <select
            class="country-selector"
            onchange={on_change}
            aria-label={props.label.clone()}
            title={props.label.clone()}
        >
            if props.selected.is_none() {
                <option value="" selected=true disabled=true>{props.label.clone()}</option>
            }
            {
                props.countries.iter().map(|&country| {
                    let selected = props.selected.as_deref() == Some(country);
                    html! {
                        <option value={country} {selected}>{country}</option>
                    }
                }).collect::<Html>()
            }
        </select>
    }
}
