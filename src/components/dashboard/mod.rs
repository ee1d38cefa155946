//! Backend dashboard shell: sidebar menu plus the active tab.

mod channels;
mod editors;
mod market;
mod playground;

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::dom_utils::{el, on_click, text_el};
use crate::messages::Message;
use crate::state::{dispatch_global_message, ActiveView, DashboardMenu, APP_STATE};

const MENU_ITEMS: [(DashboardMenu, &str); 4] = [
    (DashboardMenu::Dashboard, "總覽"),
    (DashboardMenu::Agents, "AI 客服"),
    (DashboardMenu::Channels, "頻道"),
    (DashboardMenu::Playground, "測試區"),
];

pub fn render(document: &Document) -> Result<(), JsValue> {
    let root = crate::views::app_root(document)?;

    let (menu, agent_name, show_market, show_line) = APP_STATE.with(|s| {
        let s = s.borrow();
        (
            s.dashboard_menu,
            s.current_agent
                .as_ref()
                .map(|a| a.name.clone())
                .unwrap_or_default(),
            s.show_market_modal,
            s.show_line_modal,
        )
    });

    let page = el(document, "div", "dashboard-page")?;
    page.append_child(&render_sidebar(document, menu, &agent_name)?.into())?;

    let content = el(document, "div", "dashboard-content")?;
    match menu {
        DashboardMenu::Dashboard => render_overview(document, &content)?,
        DashboardMenu::Agents => editors::render(document, &content)?,
        DashboardMenu::Channels => channels::render(document, &content)?,
        DashboardMenu::Playground => playground::render(document, &content)?,
    }
    page.append_child(&content)?;

    if show_market {
        page.append_child(&market::render(document)?.into())?;
    }
    if show_line {
        page.append_child(&channels::render_line_modal(document)?.into())?;
    }

    root.append_child(&page)?;
    Ok(())
}

fn render_sidebar(
    document: &Document,
    active: DashboardMenu,
    agent_name: &str,
) -> Result<Element, JsValue> {
    let sidebar = el(document, "div", "dashboard-sidebar")?;
    let title = if agent_name.is_empty() {
        "管理後台"
    } else {
        agent_name
    };
    sidebar.append_child(&text_el(document, "h2", "sidebar-title", title)?.into())?;

    for (menu, label) in MENU_ITEMS {
        let class = if menu == active {
            "sidebar-item active"
        } else {
            "sidebar-item"
        };
        let item = text_el(document, "button", class, label)?;
        on_click(&item, move |_| {
            dispatch_global_message(Message::SetDashboardMenu(menu));
        })?;
        sidebar.append_child(&item)?;
    }

    let back = text_el(document, "button", "sidebar-item back", "← 我的客服")?;
    on_click(&back, move |_| {
        dispatch_global_message(Message::NavigateTo(ActiveView::AgentHome));
    })?;
    sidebar.append_child(&back)?;
    Ok(sidebar)
}

fn render_overview(document: &Document, content: &Element) -> Result<(), JsValue> {
    let (agent, stats) = APP_STATE.with(|s| {
        let s = s.borrow();
        (s.current_agent.clone(), s.token_stats.clone())
    });

    content.append_child(&text_el(document, "h2", "", "總覽")?.into())?;

    let Some(agent) = agent else {
        content.append_child(&text_el(document, "p", "loading-hint", "載入中…")?.into())?;
        return Ok(());
    };

    let card = el(document, "div", "overview-card")?;
    card.append_child(&text_el(document, "h3", "", &agent.name)?.into())?;
    let deploy_label = match agent.deploy_type.as_deref() {
        Some(t) => format!("部署狀態：{}", t),
        None => "部署狀態：尚未部署".to_string(),
    };
    card.append_child(&text_el(document, "p", "", &deploy_label)?.into())?;
    content.append_child(&card)?;

    if let Some(stats) = stats {
        let usage = el(document, "div", "overview-card")?;
        usage.append_child(&text_el(document, "h3", "", "Token 使用量")?.into())?;
        usage.append_child(&text_el(
            document,
            "p",
            "token-total",
            &format!("總計 {} tokens", stats.total_tokens),
        )?.into())?;
        let table = el(document, "table", "token-table")?;
        for tx in stats.transactions.iter().take(20) {
            let row = el(document, "tr", "")?;
            row.append_child(&text_el(document, "td", "", &tx.timestamp)?.into())?;
            row.append_child(&text_el(document, "td", "", &tx.action)?.into())?;
            row.append_child(&text_el(document, "td", "", &format!("{}", tx.tokens))?.into())?;
            table.append_child(&row)?;
        }
        usage.append_child(&table)?;
        content.append_child(&usage)?;
    }

    Ok(())
}
