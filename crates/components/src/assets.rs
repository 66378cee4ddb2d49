//! Pinned Bootstrap assets and the inline style and behaviour blocks that
//! go with them.

use bootwire_core::{html, Attributes, Element, Node};

pub const BOOTSTRAP_VERSION: &str = "5.3.3";
pub const BOOTSTRAP_ICONS_VERSION: &str = "1.11.3";

const BOOTSTRAP_CSS_SRI: &str =
    "sha384-QWTKZyjpPEjISv5WaRU9OFeRpok6YctnYmDr5pNlyT2bRjXh0JMhjY6hW+ALEwIH";
const BOOTSTRAP_JS_SRI: &str =
    "sha384-YVPcrYf0tY3lHB60NNkmXc5s9fDVZLESaAA55NDzOxhy9GkcIdslK1eN7N6jIeHz";

/// Stylesheet additions: softer shadows, button hover lift, theme
/// transitions, the text-clamp toggle and the simple-toast fade out.
pub const CUSTOM_STYLES: &str = r#"
:root {
  --bw-shadow-sm: 0 1px 2px 0 rgba(0, 0, 0, 0.05);
  --bw-shadow: 0 1px 3px 0 rgba(0, 0, 0, 0.1), 0 1px 2px -1px rgba(0, 0, 0, 0.1);
  --bw-shadow-lg: 0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -4px rgba(0, 0, 0, 0.1);
  --bw-transition: all 0.2s cubic-bezier(0.4, 0, 0.2, 1);
}
.shadow-sm { box-shadow: var(--bw-shadow-sm) !important; }
.shadow { box-shadow: var(--bw-shadow) !important; }
.shadow-lg { box-shadow: var(--bw-shadow-lg) !important; }
.btn { transition: var(--bw-transition); }
.btn:hover:not(:disabled) { transform: translateY(-1px); box-shadow: var(--bw-shadow); }
.btn:active:not(:disabled) { transform: translateY(0); }
[data-bs-theme="dark"] { transition: background-color 0.3s, color 0.3s; }
.navbar-glass { backdrop-filter: blur(12px); background-color: rgba(var(--bs-body-bg-rgb), 0.75); }
.feature-icon { display: inline-flex; align-items: center; justify-content: center; width: 3rem; height: 3rem; border-radius: 0.75rem; font-size: 1.5rem; margin-bottom: 1rem; }
.bw-text-clamp [data-bw-text-toggle] { padding: 0; vertical-align: baseline; }
@keyframes toastFadeOut { to { opacity: 0; visibility: hidden; } }
"#;

/// Client behaviour for components that need it: toggle groups, text clamp,
/// searchable selects, focus traps and toasts swapped in by htmx.
pub const INTERACTION_SCRIPT: &str = r#"
(function () {
  document.addEventListener("click", function (event) {
    const item = event.target.closest("[data-bw-toggle-item]");
    if (item) {
      const group = item.closest("[data-bw-toggle-group]");
      const active = group.dataset.bwActiveClass || "active";
      group.querySelectorAll("[data-bw-toggle-item]").forEach(function (button) {
        const on = button === item;
        button.classList.toggle(active, on);
        button.setAttribute("aria-pressed", on ? "true" : "false");
        button.setAttribute("aria-current", on ? "true" : "false");
      });
      const input = group.dataset.bwInputId && document.getElementById(group.dataset.bwInputId);
      if (input) input.value = item.dataset.bwValue;
      return;
    }

    const toggle = event.target.closest("[data-bw-text-toggle]");
    if (toggle) {
      const root = toggle.closest("[data-bw-text-clamp]");
      const expanded = toggle.getAttribute("aria-expanded") === "true";
      root.querySelector("[data-bw-preview]").classList.toggle("d-none", !expanded);
      root.querySelector("[data-bw-full]").classList.toggle("d-none", expanded);
      toggle.setAttribute("aria-expanded", expanded ? "false" : "true");
      toggle.textContent = expanded ? toggle.dataset.bwExpandLabel : toggle.dataset.bwCollapseLabel;
      return;
    }

    const option = event.target.closest(".searchable-select .list-group-item[data-value]");
    if (option) {
      event.preventDefault();
      const root = option.closest(".searchable-select");
      const select = root.querySelector("select");
      select.innerHTML = "";
      select.add(new Option(option.textContent, option.dataset.value, true, true));
      root.querySelector("input[type=search]").value = option.textContent;
      select.dispatchEvent(new Event("change", { bubbles: true }));
    }
  });

  document.addEventListener("keydown", function (event) {
    if (event.key !== "Tab") return;
    const trap = event.target.closest("[data-bw-focus-trap]");
    if (!trap) return;
    const focusable = trap.querySelectorAll(
      'a[href], button:not([disabled]), input:not([disabled]), select, textarea, [tabindex]:not([tabindex="-1"])'
    );
    if (!focusable.length) return;
    const first = focusable[0];
    const last = focusable[focusable.length - 1];
    if (event.shiftKey && document.activeElement === first) {
      event.preventDefault();
      last.focus();
    } else if (!event.shiftKey && document.activeElement === last) {
      event.preventDefault();
      first.focus();
    }
  });

  function activate(root) {
    root.querySelectorAll("[data-bw-focus-trap][data-bw-autofocus]").forEach(function (trap) {
      const target = trap.querySelector(trap.dataset.bwAutofocus);
      if (target) target.focus();
    });
    if (window.bootstrap) {
      root.querySelectorAll(".toast:not(.pwa-install-toast)").forEach(function (el) {
        bootstrap.Toast.getOrCreateInstance(el).show();
      });
    }
  }

  document.addEventListener("DOMContentLoaded", function () { activate(document); });
  document.addEventListener("htmx:load", function (event) { activate(event.target); });
})();
"#;

fn stylesheet(href: String) -> Element {
    html::link().attr("rel", "stylesheet").attr("href", href)
}

/// Bootstrap CSS, Bootstrap Icons CSS and the Bootstrap bundle from jsDelivr.
pub fn cdn_assets() -> Vec<Element> {
    vec![
        stylesheet(format!(
            "https://cdn.jsdelivr.net/npm/bootstrap@{BOOTSTRAP_VERSION}/dist/css/bootstrap.min.css"
        ))
        .attr("integrity", BOOTSTRAP_CSS_SRI)
        .attr("crossorigin", "anonymous"),
        stylesheet(format!(
            "https://cdn.jsdelivr.net/npm/bootstrap-icons@{BOOTSTRAP_ICONS_VERSION}/font/bootstrap-icons.min.css"
        )),
        html::script()
            .attr(
                "src",
                format!(
                    "https://cdn.jsdelivr.net/npm/bootstrap@{BOOTSTRAP_VERSION}/dist/js/bootstrap.bundle.min.js"
                ),
            )
            .attr("integrity", BOOTSTRAP_JS_SRI)
            .attr("crossorigin", "anonymous"),
    ]
}

/// The same assets served from `/static`.
pub fn local_assets() -> Vec<Element> {
    vec![
        stylesheet("/static/css/bootstrap.min.css".to_string()),
        stylesheet("/static/css/bootstrap-icons.min.css".to_string()),
        html::script().attr("src", "/static/js/bootstrap.bundle.min.js"),
    ]
}

pub fn custom_styles() -> Element {
    html::style().child(Node::raw(CUSTOM_STYLES))
}

pub fn interaction_script() -> Element {
    html::script().child(Node::raw(INTERACTION_SCRIPT))
}

/// Asset set to put at the top of the head.
pub fn get_assets(use_cdn: bool, include_custom: bool) -> Vec<Element> {
    let mut assets = if use_cdn { cdn_assets() } else { local_assets() };
    if include_custom {
        assets.push(custom_styles());
        assets.push(interaction_script());
    }
    assets
}
