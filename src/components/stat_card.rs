use yew::prelude::*;

use crate::models::{StatVariant, Trend};

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub title: AttrValue,
    pub value: AttrValue,
    pub icon: AttrValue,
    #[prop_or_default]
    pub trend: Option<Trend>,
    #[prop_or_default]
    pub variant: StatVariant,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class={props.variant.card_class()}>
            <div class="stat-header">
                <span class="stat-title">{props.title.clone()}</span>
                <span class={props.variant.icon_class()}>{props.icon.clone()}</span>
            </div>
            <div class="stat-value">{props.value.clone()}</div>
            if let Some(trend) = &props.trend {
                <p class={classes!("stat-trend", trend.tone().text_class())}>{trend.text()}</p>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::LocalServerRenderer;

    fn props(trend: Option<Trend>) -> StatCardProps {
        StatCardProps {
            title: "Active Routes".into(),
            value: "24".into(),
            icon: "🚚".into(),
            trend,
            variant: StatVariant::Success,
        }
    }

    #[tokio::test]
    async fn renders_positive_trend_with_sign() {
        let trend = Trend::positive(8.0, "from last week");
        let rendered = LocalServerRenderer::<StatCard>::with_props(props(Some(trend))).render().await;
        assert!(rendered.contains("stat-card stat-success"));
        assert!(rendered.contains("Active Routes"));
        assert!(rendered.contains("+8% from last week"));
        assert!(rendered.contains("text-success"));
    }

    #[tokio::test]
    async fn omits_trend_when_absent() {
        let rendered = LocalServerRenderer::<StatCard>::with_props(props(None)).render().await;
        assert!(rendered.contains("24"));
        assert!(!rendered.contains("stat-trend"));
    }
}
