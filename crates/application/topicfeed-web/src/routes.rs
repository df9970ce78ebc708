//! Route table for the API

/// All routes served by [`create_router`](crate::create_router)
pub const ROUTES: &[(&str, &str, &str)] = &[
    ("GET", "/api", "Health check"),
    ("GET", "/api/topics", "All topics"),
    ("GET", "/api/feed", "Feed page (?page, ?limit, ?sort=created_at|popular|rating|most_watched)"),
    ("GET", "/api/search", "Ranked search over topics and feed (?q)"),
    ("GET", "/assets/*", "Static files from the assets directory"),
];

/// Route table as aligned text, one route per line
pub fn render_routes() -> String {
    let mut out = String::from("topicfeed routes:\n");
    out.push_str(&format!("{:-<60}\n", ""));
    for (method, path, desc) in ROUTES {
        out.push_str(&format!("{:6} {:14} {}\n", method, path, desc));
    }
    out
}

/// Print all routes
pub fn print_routes() {
    println!("\n{}", render_routes());
}
