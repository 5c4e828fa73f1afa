#[derive(Debug, Clone)]
pub enum Message {
    ToggleSidebar,
    Navigate(crate::router::ReportView),
}
