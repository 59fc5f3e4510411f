//! src/site/mod.rs
//!
//! Server-side rendering of the landing page. `render` produces the complete
//! app markup for the initial, pre-interaction state; it is deterministic so
//! the pre-render step can run at build time and produce stable output.

pub mod carousel;
pub mod form;
pub mod meta;

mod cta;
mod features;
mod footer;
mod hero;

pub use cta::render_cta;
pub use features::render_features;
pub use footer::render_footer;
pub use hero::render_hero;

use carousel::RotatingText;
use form::{FormSnapshot, FormStatus};

/// The rotating hero fragments, in display order.
pub const CAROUSEL_TEXTS: [&str; 3] = ["Real moments", "Real people", "Real connections"];

/// Render the complete app markup for the initial page state.
///
/// Pure and deterministic: no clock, no randomness, no I/O. Interactivity
/// (carousel rotation, submitting over `POST /waitlist`) is layered on by the
/// inline script, so without it the page degrades to a plain form post.
pub fn render() -> String {
    let form = FormSnapshot::default();
    let rotation = RotatingText::new(CAROUSEL_TEXTS.iter().map(|s| s.to_string()).collect())
        .expect("the carousel text list is not empty");

    format!(
        "{HEADER}\n<main>\n{hero}\n{features}\n{cta}\n</main>\n{footer}\n{structured_data}\n{script}",
        hero = render_hero(&form, &rotation),
        features = render_features(),
        cta = render_cta(&form),
        footer = render_footer(),
        structured_data = structured_data(),
        script = SCRIPT,
    )
}

const HEADER: &str = r#"<header class="sr-only">
    <h1>MyCandid - Authentic Social Media Platform</h1>
    <p>Join the waitlist for the most authentic social media experience</p>
</header>"#;

/// Shared signup form fragment. `source` tags which section a submission came
/// from; `success_text` is the banner shown once the signup went through.
pub(crate) fn signup_fragment(form: &FormSnapshot, source: &str, success_text: &str) -> String {
    if form.status == FormStatus::Success {
        return format!(
            r#"<div class="signup-success" role="status" aria-live="polite"><p>{}</p></div>"#,
            htmlescape::encode_minimal(success_text)
        );
    }

    let error = match &form.status {
        FormStatus::Failure(message) => format!(
            "\n    <p class=\"signup-error\" role=\"alert\">{}</p>",
            htmlescape::encode_minimal(message)
        ),
        _ => String::new(),
    };
    let disabled = if form.is_submitting { " disabled" } else { "" };
    let label = if form.is_submitting {
        "Joining..."
    } else {
        "Join Waitlist"
    };

    format!(
        r#"<form class="signup-form" method="post" action="/waitlist" data-success="{success}">
    <input type="hidden" name="source" value="{source}">
    <input type="email" name="email" placeholder="Enter your email" value="{email}" aria-label="Email address" required{disabled}>
    <button type="submit"{disabled}>{label}</button>{error}
</form>"#,
        success = htmlescape::encode_minimal(success_text),
        source = htmlescape::encode_minimal(source),
        email = htmlescape::encode_minimal(&form.email),
    )
}

fn structured_data() -> String {
    let data = serde_json::json!({
        "@context": "https://schema.org",
        "@type": "SoftwareApplication",
        "name": "MyCandid",
        "applicationCategory": "SocialNetworkingApplication",
        "operatingSystem": "iOS, Android",
        "description": "Authentic social media platform where you share only what you capture in the moment. Real moments, real connections.",
    });
    format!(r#"<script type="application/ld+json">{data}</script>"#)
}

// Progressive enhancement: rotates the carousel frames and swaps the plain
// form post for a fetch to the same endpoint, mirroring the server's own
// submission flow (banner on success, inline message on failure).
const SCRIPT: &str = r#"<script>
(function () {
    document.querySelectorAll(".text-carousel").forEach(function (carousel) {
        var frames = carousel.querySelectorAll(".carousel-frame");
        if (frames.length < 2) {
            return;
        }
        var interval = parseInt(carousel.dataset.interval, 10) || 2500;
        var current = 0;
        setInterval(function () {
            frames[current].hidden = true;
            current = (current + 1) % frames.length;
            frames[current].hidden = false;
        }, interval);
    });

    document.querySelectorAll("form.signup-form").forEach(function (form) {
        form.addEventListener("submit", function (event) {
            event.preventDefault();
            var button = form.querySelector("button");
            if (button.disabled) {
                return;
            }
            button.disabled = true;
            button.textContent = "Joining...";
            var finish = function () {
                button.disabled = false;
                button.textContent = "Join Waitlist";
            };
            var fail = function (message) {
                var error = form.querySelector(".signup-error");
                if (!error) {
                    error = document.createElement("p");
                    error.className = "signup-error";
                    error.setAttribute("role", "alert");
                    form.appendChild(error);
                }
                error.textContent = message;
            };
            fetch(form.action, {
                method: "POST",
                headers: { "Content-Type": "application/x-www-form-urlencoded" },
                body: new URLSearchParams(new FormData(form))
            })
                .then(function (response) { return response.json(); })
                .then(function (result) {
                    if (result.success) {
                        var banner = document.createElement("div");
                        banner.className = "signup-success";
                        banner.setAttribute("role", "status");
                        var text = document.createElement("p");
                        text.textContent = form.dataset.success;
                        banner.appendChild(text);
                        form.replaceWith(banner);
                    } else {
                        fail(result.message);
                        finish();
                    }
                })
                .catch(function () {
                    fail("Unable to submit. Please try again later.");
                    finish();
                });
        });
    });
})();
</script>"#;
