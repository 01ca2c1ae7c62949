use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::models::energy_data::source_name;

#[derive(Properties, PartialEq)]
pub struct SeriesToggleProps {
    /// Column keys that can be shown.
    pub keys: &'static [&'static str],
    pub visible: Vec<String>,
    pub on_change: Callback<Vec<String>>,
}

/// Checkbox row that picks which series a chart draws.
#[function_component(SeriesToggle)]
pub fn series_toggle(props: &SeriesToggleProps) -> Html {
    html! {
        <div class="series-toggle">
            {
                props.keys.iter().map(|&key| {
                    let checked = props.visible.iter().any(|v| v == key);
                    let onchange = {
                        let visible = props.visible.clone();
                        let on_change = props.on_change.clone();
                        Callback::from(move |e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            on_change.emit(toggled(&visible, key, input.checked()));
                        })
                    };
                    html! {
                        <label class="series-option">
                            <input type="checkbox" {checked} {onchange} />
                            {source_name(key)}
                        </label>
                    }
                }).collect::<Html>()
            }
        </div>
    }
}

/// Adds or removes `key`, keeping the remaining order.
pub fn toggled(visible: &[String], key: &str, on: bool) -> Vec<String> {
    let mut next: Vec<String> = visible.iter().filter(|v| *v != key).cloned().collect();
    if on {
        next.push(key.to_string());
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggled() {
        let visible = vec!["coal_consumption".to_string(), "gas_consumption".to_string()];

        assert_eq!(toggled(&visible, "coal_consumption", false), vec!["gas_consumption"]);
        assert_eq!(toggled(&visible, "oil_consumption", true).len(), 3);
        // Re-enabling an already visible key does not duplicate it
        assert_eq!(toggled(&visible, "gas_consumption", true).len(), 2);
    }
}
