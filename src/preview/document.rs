//! Preview document builder.
//!
//! DESIGN
//! ======
//! Produces one self-contained HTML document that compiles and mounts the
//! generated component in the browser, with no build step:
//!
//! 1. The source is embedded as inert `text/plain` script content, with
//!    closing-script and comment-open sequences escaped so it can't end the
//!    element early. The loader reverses the escaping when reading it back.
//! 2. A plain (non-transpiled) loader script defines a CommonJS-style
//!    `module.exports` target and a `require` shim backed by the
//!    [`ModuleRegistry`] table.
//! 3. Compile boundary: set up the mocks, transpile, and run the module
//!    body. Failure renders a `data-boundary="compile"` panel and stops.
//! 4. Mount boundary: pick the default export (or the sole export) and
//!    render it under a React error boundary. Failure renders a
//!    `data-boundary="mount"` panel; no usable export renders a
//!    "component not found" placeholder instead.
//!
//! Output is a pure function of the inputs: no timestamps, no random IDs.

use std::borrow::Cow;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::imports::scan_imports;
use super::registry::{COMPONENT_KIT_PREFIX, FRAMEWORK_PATH, JS_MODULE_TABLE, JS_PLACEHOLDER_FACTORY, ModuleRegistry};

/// Element holding the inert source text.
pub const SOURCE_ELEMENT_ID: &str = "generated-code";
/// Element the component mounts into.
pub const ROOT_ELEMENT_ID: &str = "root";
/// `data-boundary` value of the compile-failure panel.
pub const COMPILE_BOUNDARY: &str = "compile";
/// `data-boundary` value of the mount-failure panel and not-found placeholder.
pub const MOUNT_BOUNDARY: &str = "mount";
/// `data-reason` of the placeholder shown when no component was exported.
pub const COMPONENT_NOT_FOUND: &str = "component-not-found";

/// `<` followed by the escape character, a closing script tag, or a comment
/// opener. Every match gets a `\` inserted after the `<`.
static INERT_ESCAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<(\\|/script|!--)").expect("inert escape pattern compiles"));

// =============================================================================
// RUNTIME
// =============================================================================

/// Versioned locations of the runtime libraries the document loads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewRuntime {
    pub styles: Cow<'static, str>,
    pub framework: Cow<'static, str>,
    pub dom_renderer: Cow<'static, str>,
    pub transpiler: Cow<'static, str>,
}

impl PreviewRuntime {
    pub const DEFAULT: Self = Self {
        styles: Cow::Borrowed("https://cdn.tailwindcss.com/3.4.5"),
        framework: Cow::Borrowed("https://unpkg.com/react@18.3.1/umd/react.development.js"),
        dom_renderer: Cow::Borrowed("https://unpkg.com/react-dom@18.3.1/umd/react-dom.development.js"),
        transpiler: Cow::Borrowed("https://unpkg.com/@babel/standalone@7.24.7/babel.min.js"),
    };
}

impl Default for PreviewRuntime {
    fn default() -> Self {
        Self::DEFAULT
    }
}

static DEFAULT_RUNTIME: PreviewRuntime = PreviewRuntime::DEFAULT;

// =============================================================================
// DOCUMENT
// =============================================================================

/// A finished, self-contained preview document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewDocument(String);

impl PreviewDocument {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for PreviewDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<PreviewDocument> for String {
    fn from(doc: PreviewDocument) -> Self {
        doc.0
    }
}

// =============================================================================
// BUILDER
// =============================================================================

/// Composes preview documents against a registry and runtime set.
#[derive(Debug, Clone, Copy)]
pub struct PreviewBuilder<'a> {
    registry: &'a ModuleRegistry,
    runtime: &'a PreviewRuntime,
}

impl Default for PreviewBuilder<'static> {
    fn default() -> Self {
        Self { registry: ModuleRegistry::global(), runtime: &DEFAULT_RUNTIME }
    }
}

impl<'a> PreviewBuilder<'a> {
    #[must_use]
    pub fn new(registry: &'a ModuleRegistry, runtime: &'a PreviewRuntime) -> Self {
        Self { registry, runtime }
    }

    /// Build the document. Infallible: a broken component still yields a
    /// document, which reports the failure when rendered.
    #[must_use]
    pub fn build(&self, source: &str, component_name: &str) -> PreviewDocument {
        self.report_imports(source);

        let runtime = self.runtime;
        let mut html = String::with_capacity(source.len() + 16 * 1024);
        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("<meta charset=\"UTF-8\">\n");
        html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
        push_tag(&mut html, "title", &format!("{} preview", escape_html(component_name)));
        push_script_src(&mut html, &runtime.styles);
        push_script_src(&mut html, &runtime.framework);
        push_script_src(&mut html, &runtime.dom_renderer);
        push_script_src(&mut html, &runtime.transpiler);
        push_tag(&mut html, "style", BASE_STYLES);
        html.push_str("</head>\n<body>\n");
        html.push_str(&format!(
            "<div id=\"{ROOT_ELEMENT_ID}\" data-component=\"{}\"></div>\n",
            escape_html(component_name)
        ));
        html.push_str(&format!("<script id=\"{SOURCE_ELEMENT_ID}\" type=\"text/plain\">"));
        html.push_str(&escape_inert_text(source));
        html.push_str("</script>\n<script>\n(function () {\n'use strict';\n");
        html.push_str(&preview_constants(component_name));
        html.push_str("function setupModules() {\n");
        html.push_str(&self.registry.render_js());
        html.push_str(&format!("return {{ {JS_MODULE_TABLE}, {JS_PLACEHOLDER_FACTORY} }};\n}}\n"));
        html.push_str(LOADER_JS);
        html.push_str("})();\n</script>\n</body>\n</html>\n");

        debug!(component = component_name, source_len = source.len(), html_len = html.len(), "document: built");
        PreviewDocument(html)
    }

    /// Check each static import against the registry so unregistered and
    /// unresolved imports show up in the server log, not just the browser
    /// console.
    fn report_imports(&self, source: &str) {
        for path in scan_imports(source) {
            if path != FRAMEWORK_PATH {
                self.registry.diagnose(&path);
            }
        }
    }
}

/// Build a preview with the process-wide registry and default runtime.
#[must_use]
pub fn build(source: &str, component_name: &str) -> PreviewDocument {
    PreviewBuilder::default().build(source, component_name)
}

/// Values the loader reads from its `PREVIEW` object.
fn preview_constants(component_name: &str) -> String {
    format!(
        "const PREVIEW = {{ componentName: {}, kitPrefix: {}, frameworkPath: {}, sourceId: {}, rootId: {}, \
         compileBoundary: {}, mountBoundary: {}, notFoundReason: {} }};\n",
        js_literal(component_name),
        js_literal(COMPONENT_KIT_PREFIX),
        js_literal(FRAMEWORK_PATH),
        js_literal(SOURCE_ELEMENT_ID),
        js_literal(ROOT_ELEMENT_ID),
        js_literal(COMPILE_BOUNDARY),
        js_literal(MOUNT_BOUNDARY),
        js_literal(COMPONENT_NOT_FOUND),
    )
}

// =============================================================================
// ESCAPING
// =============================================================================

/// Escape `</script` (any case) and `<!--` so the text can sit inside a
/// script element without ending it. `<\` is escaped too, which keeps the
/// mapping reversible: the loader's `readSource` drops the `\` after every
/// `<\` and gets the original text back.
#[must_use]
pub fn escape_inert_text(source: &str) -> Cow<'_, str> {
    INERT_ESCAPE.replace_all(source, "<\\$1")
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// JSON string literal that is also safe inside a script element.
fn js_literal(text: &str) -> String {
    serde_json::to_string(text)
        .unwrap_or_else(|_| "\"\"".to_string())
        .replace('<', "\\u003c")
}

fn push_tag(html: &mut String, tag: &str, body: &str) {
    html.push_str(&format!("<{tag}>{body}</{tag}>\n"));
}

fn push_script_src(html: &mut String, src: &str) {
    html.push_str(&format!("<script src=\"{}\" crossorigin></script>\n", escape_html(src)));
}

// =============================================================================
// TEMPLATES
// =============================================================================

const BASE_STYLES: &str = "body { background-color: #f3f4f6; padding: 20px; margin: 0; font-family: ui-sans-serif, system-ui, sans-serif; }\n\
.preview-panel { padding: 10px 12px; border-radius: 4px; margin-bottom: 20px; font-size: 14px; }\n\
.preview-panel pre { margin: 6px 0 0; white-space: pre-wrap; font-family: ui-monospace, monospace; font-size: 12px; }\n\
.preview-panel[data-boundary=\"compile\"] { color: #b91c1c; background: #fee2e2; border: 1px solid #ef4444; }\n\
.preview-panel[data-boundary=\"mount\"] { color: #9a3412; background: #ffedd5; border: 1px solid #f97316; }";

/// Loader body. Runs after `PREVIEW` and `setupModules` are defined.
const LOADER_JS: &str = r"function errorMessage(error) {
  return error && error.message ? error.message : String(error);
}

function showPanel(boundary, title, message) {
  const panel = document.createElement('div');
  panel.className = 'preview-panel';
  panel.setAttribute('role', 'alert');
  panel.setAttribute('data-boundary', boundary);
  const heading = document.createElement('strong');
  heading.textContent = title;
  const detail = document.createElement('pre');
  detail.textContent = message;
  panel.append(heading, detail);
  document.body.appendChild(panel);
}

function readSource() {
  const raw = document.getElementById(PREVIEW.sourceId).textContent;
  return raw.replace(/<\\(\\|\/script|!--)/gi, '<$1');
}

function isKitPath(path) {
  return path.startsWith(PREVIEW.kitPrefix) && path.slice(PREVIEW.kitPrefix.length).replace(/^\/+|\/+$/g, '') !== '';
}

function isRenderable(value) {
  return typeof value === 'function' || (value !== null && typeof value === 'object' && '$$typeof' in value);
}

function resolveComponent(exported) {
  if (isRenderable(exported)) return exported;
  if (!exported || typeof exported !== 'object') return null;
  if (isRenderable(exported.default)) return exported.default;
  const names = Object.keys(exported).filter((key) => key !== 'default' && key !== '__esModule');
  if (names.length === 1 && isRenderable(exported[names[0]])) return exported[names[0]];
  return null;
}

const module = { exports: {} };
let compiled = false;

// Compile boundary: mocks, transpile, module body.
try {
  const { mockModules, placeholderModule } = setupModules();
  const require = (path) => {
    if (path === PREVIEW.frameworkPath) return React;
    if (Object.prototype.hasOwnProperty.call(mockModules, path)) return mockModules[path];
    if (isKitPath(path)) {
      console.warn('Mocking unregistered component:', path);
      return placeholderModule(path);
    }
    console.warn('Missing module:', path);
    return {};
  };
  const transformed = Babel.transform(readSource(), {
    presets: ['env', 'react', 'typescript'],
    filename: 'component.tsx',
  }).code;
  const evaluate = new Function('module', 'exports', 'require', 'React', transformed);
  evaluate(module, module.exports, require, React);
  compiled = true;
} catch (error) {
  console.error('Preview compilation error:', error);
  showPanel(PREVIEW.compileBoundary, 'Preview Compilation Error', errorMessage(error));
}

// Mount boundary: only entered after a clean compile.
if (compiled) {
  let reported = false;
  const reportMountError = (error) => {
    if (reported) return;
    reported = true;
    console.error('Preview mount error:', error);
    showPanel(PREVIEW.mountBoundary, 'Preview Mount Error', errorMessage(error));
  };

  class MountBoundary extends React.Component {
    constructor(props) {
      super(props);
      this.state = { error: null };
    }
    static getDerivedStateFromError(error) {
      return { error };
    }
    componentDidCatch(error) {
      reportMountError(error);
    }
    render() {
      return this.state.error ? null : this.props.children;
    }
  }

  try {
    const root = ReactDOM.createRoot(document.getElementById(PREVIEW.rootId));
    const Component = resolveComponent(module.exports);
    if (Component) {
      if (!Component.displayName) Component.displayName = PREVIEW.componentName;
      console.info('Mounting ' + PREVIEW.componentName);
      root.render(React.createElement(MountBoundary, null, React.createElement(Component)));
    } else {
      root.render(React.createElement('div', {
        className: 'text-red-500',
        'data-boundary': PREVIEW.mountBoundary,
        'data-reason': PREVIEW.notFoundReason,
      }, 'Component not found. Check console for errors.'));
    }
  } catch (error) {
    reportMountError(error);
  }
}
";

#[cfg(test)]
#[path = "document_test.rs"]
mod tests;
