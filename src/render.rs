//! HTML rendering for the venue display page.

use crate::models::ScheduleEntry;

/// Render the display page. Venue screens poll by reloading the whole page,
/// hence the refresh meta tag.
pub fn render_schedule_page(entries: &[ScheduleEntry]) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head><title>Current Matches</title>\n");
    html.push_str("<link rel=\"stylesheet\" type=\"text/css\" href=\"/styles.css\">\n");
    html.push_str("<meta http-equiv=\"refresh\" content=\"20\">\n");
    html.push_str("</head>\n<body class=\"page-body\">\n");
    html.push_str("<h1 class=\"title\">Current Matches</h1>\n");
    for entry in entries {
        html.push_str(&format!(
            "<p><span class=\"time\">{}</span> - <span class=\"players\">{} vs {}</span> <span class=\"tournament\">({})</span>",
            escape_html(&entry.time),
            escape_html(&entry.player1),
            escape_html(&entry.player2),
            escape_html(&entry.tournament),
        ));
        if !entry.next_opponent_label.is_empty() {
            html.push_str(&format!(
                " <span class=\"next\">winner plays {}</span>",
                escape_html(&entry.next_opponent_label)
            ));
        }
        html.push_str("</p>\n");
    }
    html.push_str("</body>\n</html>\n");
    html
}

/// Team names come from an external service and land in text nodes.
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
