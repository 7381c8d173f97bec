use yew::prelude::*;

use crate::models::Season;

#[derive(Properties, PartialEq, Clone)]
pub struct SeasonItemProps {
    pub season: u32,
    #[prop_or(false)]
    pub active: bool,
    #[prop_or_default]
    pub on_click: Option<Callback<u32>>,
}

/// Emits `season` once on the item's callback, if it has one
pub fn activate(on_click: &Option<Callback<u32>>, season: u32) {
    if let Some(cb) = on_click {
        cb.emit(season);
    }
}

#[function_component(SeasonItem)]
pub fn season_item(props: &SeasonItemProps) -> Html {
    let season = Season { active: props.active, ..Season::new(props.season) };

    let onclick = {
        let cb = props.on_click.clone();
        let number = season.number;
        Callback::from(move |_: MouseEvent| activate(&cb, number))
    };

    html! {
        <button
            type="button"
            class={classes!("list-group-item", "list-group-item-action", "item", season.active.then_some("active"))}
            aria-current={season.active.then_some("true")}
            {onclick}
        >
            <span>{season.label()}</span>
        </button>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct SeasonListProps {
    pub seasons: Vec<u32>,
    #[prop_or_default]
    pub active: Option<u32>,
    #[prop_or_default]
    pub on_select: Option<Callback<u32>>,
}

/// Vertical list of seasons with one optionally highlighted
#[function_component(SeasonList)]
pub fn season_list(props: &SeasonListProps) -> Html {
    html! {
        <div class="list-group season-list">
            { for props.seasons.iter().map(|&number| html! {
                <SeasonItem
                    key={number}
                    season={number}
                    active={props.active == Some(number)}
                    on_click={props.on_select.clone()}
                />
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn activating_emits_own_season_once() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let on_click = {
            let seen = Rc::clone(&seen);
            Some(Callback::from(move |season: u32| seen.borrow_mut().push(season)))
        };

        activate(&on_click, 3);
        assert_eq!(*seen.borrow(), vec![3]);

        activate(&on_click, 3);
        assert_eq!(*seen.borrow(), vec![3, 3]);
    }

    #[test]
    fn activating_without_callback_is_a_no_op() {
        activate(&None, 3);
    }
}
