use yew::prelude::*;

use crate::models::page::Page;

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub current: Page,
    pub on_navigate: Callback<Page>,
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    html! {
        <nav class="navbar">
            {
                Page::categories().into_iter().map(|(label, page)| {
                    let active = page.path() == props.current.path();
                    let onclick = {
                        let on_navigate = props.on_navigate.clone();
                        Callback::from(move |_: MouseEvent| on_navigate.emit(page.clone()))
                    };
                    html! {
                        <button class={classes!("nav-item", active.then_some("active"))} {onclick}>
                            {label}
                        </button>
                    }
                }).collect::<Html>()
            }
        </nav>
    }
}
