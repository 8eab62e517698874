//! 查询结果展示
//!
//! 一个渲染器 + 按语言索引的标签表，替代每种语言一份的展示函数。

mod locale;
mod render;

pub use locale::{LocaleTable, table};
pub use render::{MAP_URL_TEMPLATE, map_url, render, render_json, render_local_country};
