//! HTML for the welcome banner.
//!
//! `picture` and `name` are interpolated as received, without escaping.
//! A name such as `<script>…</script>` ends up in the DOM as markup, so the
//! banner trusts the whoami endpoint completely. Known limitation.

use crate::types::WhoAmI;

/// Target of the logout link.
pub const LOGOUT_HREF: &str = "/";

/// Build the markup that replaces the root container's contents.
pub fn welcome_html(user: &WhoAmI) -> String {
    format!(
        r#"
            <header class="header">
                <img class="profile-img" src="{picture}" alt="{name}"/>
                <a href="{logout}" class="btn">Logout</a>
            </header>
            <div class="main">
                <div id="user">
                    <h1>Welcome {name}</h1>
                </div>
            </div>
        "#,
        picture = user.picture,
        name = user.name,
        logout = LOGOUT_HREF,
    )
}
