//! Module registry: mock implementations for the imports generated code uses.
//!
//! DESIGN
//! ======
//! Generated components import from a component-kit namespace
//! (`@/components/ui/*`) and an icon library (`lucide-react`). None of that
//! exists in the preview, so each known kit path maps to a [`MockModule`]
//! whose exports are small React stand-ins (plain `React.createElement`
//! calls, structural utility classes only) that look close enough to the
//! real widgets.
//!
//! Three fallbacks cover what the table can't enumerate:
//! - unknown kit paths get a single dashed-border placeholder export named
//!   after the last path segment;
//! - the icon library is a capability lookup: any export name yields the
//!   generic icon renderer;
//! - anything else resolves to an empty module plus a warning, and fails
//!   later at mount time if the component actually needed it.
//!
//! The same table is rendered to JavaScript by [`ModuleRegistry::render_js`]
//! so the in-document loader and [`ModuleRegistry::resolve`] never disagree.

use std::borrow::Cow;
use std::fmt::Write;
use std::sync::LazyLock;

use tracing::warn;

/// Namespace prefix of the mocked component kit.
pub const COMPONENT_KIT_PREFIX: &str = "@/components/ui/";
/// Import path of the icon library.
pub const ICON_LIBRARY_PATH: &str = "lucide-react";
/// Import path of the UI framework itself; the loader hands back the runtime.
pub const FRAMEWORK_PATH: &str = "react";

/// JS identifiers defined by [`ModuleRegistry::render_js`].
pub const JS_MODULE_TABLE: &str = "mockModules";
pub const JS_PLACEHOLDER_FACTORY: &str = "placeholderModule";

// =============================================================================
// MOCK TYPES
// =============================================================================

/// One stand-in export: its name and a JS expression evaluating to a
/// component function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockExport {
    pub name: Cow<'static, str>,
    pub render: Cow<'static, str>,
}

impl MockExport {
    const fn fixed(name: &'static str, render: &'static str) -> Self {
        Self { name: Cow::Borrowed(name), render: Cow::Borrowed(render) }
    }
}

/// What an import path resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockModule {
    /// A fixed export table. Empty for unresolved imports.
    Exports(Vec<MockExport>),
    /// Every export name resolves to the generic icon renderer.
    Icons,
}

impl MockModule {
    #[must_use]
    pub fn empty() -> Self {
        Self::Exports(Vec::new())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Exports(exports) if exports.is_empty())
    }

    /// Look up an export by name.
    #[must_use]
    pub fn export(&self, name: &str) -> Option<MockExport> {
        match self {
            Self::Exports(exports) => exports.iter().find(|e| e.name == name).cloned(),
            Self::Icons => Some(icon_export(name)),
        }
    }

    /// Names of the enumerable exports. The icon module has none.
    #[must_use]
    pub fn export_names(&self) -> Vec<&str> {
        match self {
            Self::Exports(exports) => exports.iter().map(|e| e.name.as_ref()).collect(),
            Self::Icons => Vec::new(),
        }
    }
}

/// Icon export for an arbitrary name.
#[must_use]
pub fn icon_export(name: &str) -> MockExport {
    MockExport { name: Cow::Owned(name.to_string()), render: Cow::Owned(format!("icon({})", js_string(name))) }
}

/// Placeholder export for an unregistered kit path, e.g.
/// `@/components/ui/alert-dialog` → `AlertDialog`.
#[must_use]
pub fn placeholder_export(path: &str) -> MockExport {
    let segment = last_segment(path);
    MockExport {
        name: Cow::Owned(pascal_case(segment)),
        render: Cow::Owned(format!("placeholder({})", js_string(segment))),
    }
}

/// Under the kit prefix with at least one non-empty segment after it.
fn is_kit_path(path: &str) -> bool {
    path.strip_prefix(COMPONENT_KIT_PREFIX)
        .is_some_and(|rest| !rest.trim_matches('/').is_empty())
}

fn last_segment(path: &str) -> &str {
    path.trim_end_matches('/').rsplit('/').next().unwrap_or(path)
}

/// Capitalize each `-`/`_`-separated word and join them.
fn pascal_case(segment: &str) -> String {
    segment
        .split(['-', '_'])
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            chars
                .next()
                .map(|c| c.to_uppercase().chain(chars).collect::<String>())
                .unwrap_or_default()
        })
        .collect()
}

fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}

// =============================================================================
// MOCK TABLE
// =============================================================================

const BUTTON: &str = "(props) => h('button', { type: 'button', ...props, className: cx('inline-flex items-center justify-center gap-2 rounded-md text-sm font-medium transition-colors disabled:pointer-events-none disabled:opacity-50 bg-slate-900 text-white hover:bg-slate-900/90 h-10 px-4 py-2', props.className) })";
const INPUT: &str = "(props) => h('input', { ...props, className: cx('flex h-10 w-full rounded-md border border-slate-200 bg-white px-3 py-2 text-sm placeholder:text-slate-400 disabled:cursor-not-allowed disabled:opacity-50', props.className) })";
const LABEL: &str = "(props) => h('label', { ...props, className: cx('text-sm font-medium leading-none', props.className) })";
const TEXTAREA: &str = "(props) => h('textarea', { ...props, className: cx('flex min-h-[80px] w-full rounded-md border border-slate-200 bg-white px-3 py-2 text-sm placeholder:text-slate-400 disabled:cursor-not-allowed disabled:opacity-50', props.className) })";
const CHECKBOX: &str = "({ checked, defaultChecked, onCheckedChange, className, ...rest }) => h('button', { type: 'button', role: 'checkbox', 'aria-checked': !!checked, ...rest, onClick: () => onCheckedChange && onCheckedChange(!checked), className: cx('peer inline-flex h-4 w-4 shrink-0 items-center justify-center rounded-sm border border-slate-900 text-[10px] leading-none', checked ? cx('bg-slate-900 text-white', className) : className) }, checked ? '\\u2713' : null)";
const SWITCH: &str = "({ checked, defaultChecked, onCheckedChange, className, ...rest }) => h('button', { type: 'button', role: 'switch', 'aria-checked': !!checked, ...rest, onClick: () => onCheckedChange && onCheckedChange(!checked), className: cx('inline-flex h-6 w-11 shrink-0 items-center rounded-full transition-colors', cx(checked ? 'bg-slate-900' : 'bg-slate-200', className)) }, h('span', { className: cx('block h-5 w-5 rounded-full bg-white shadow transition-transform', checked ? 'translate-x-5' : 'translate-x-0') }))";
const SEPARATOR: &str = "({ orientation, decorative, className, ...rest }) => h('div', { role: 'separator', ...rest, className: cx(orientation === 'vertical' ? 'shrink-0 bg-slate-200 h-full w-[1px]' : 'shrink-0 bg-slate-200 h-[1px] w-full', className) })";
const AVATAR: &str = "(props) => h('span', { ...props, className: cx('relative flex h-10 w-10 shrink-0 overflow-hidden rounded-full', props.className) })";
const AVATAR_IMAGE: &str = "(props) => h('img', { ...props, className: cx('aspect-square h-full w-full', props.className) })";
const AVATAR_FALLBACK: &str = "(props) => h('span', { ...props, className: cx('flex h-full w-full items-center justify-center rounded-full bg-slate-100', props.className) })";
const CARD: &str = "(props) => h('div', { ...props, className: cx('rounded-lg border bg-white text-slate-950 shadow-sm', props.className) })";
const CARD_HEADER: &str = "(props) => h('div', { ...props, className: cx('flex flex-col space-y-1.5 p-6', props.className) })";
const CARD_TITLE: &str = "(props) => h('h3', { ...props, className: cx('text-2xl font-semibold leading-none tracking-tight', props.className) })";
const CARD_DESCRIPTION: &str = "(props) => h('p', { ...props, className: cx('text-sm text-slate-500', props.className) })";
const CARD_CONTENT: &str = "(props) => h('div', { ...props, className: cx('p-6 pt-0', props.className) })";
const CARD_FOOTER: &str = "(props) => h('div', { ...props, className: cx('flex items-center p-6 pt-0', props.className) })";
const BADGE: &str = "({ variant, className, ...rest }) => h('span', { ...rest, className: cx('inline-flex items-center rounded-full border px-2.5 py-0.5 text-xs font-semibold', cx(variant === 'outline' ? 'text-slate-950' : variant === 'secondary' ? 'border-transparent bg-slate-100 text-slate-900' : 'border-transparent bg-slate-900 text-white', className)) })";
const PROGRESS: &str = "({ value, className, ...rest }) => h('div', { role: 'progressbar', 'aria-valuenow': value || 0, ...rest, className: cx('relative h-4 w-full overflow-hidden rounded-full bg-slate-100', className) }, h('div', { className: 'h-full bg-slate-900 transition-all', style: { width: Math.max(0, Math.min(100, value || 0)) + '%' } }))";
const SKELETON: &str = "(props) => h('div', { ...props, className: cx('animate-pulse rounded-md bg-slate-100', props.className) })";
const ALERT: &str = "({ variant, className, ...rest }) => h('div', { role: 'alert', ...rest, className: cx('relative w-full rounded-lg border p-4', cx(variant === 'destructive' ? 'border-red-500/50 text-red-600' : 'bg-white text-slate-950', className)) })";
const ALERT_TITLE: &str = "(props) => h('h5', { ...props, className: cx('mb-1 font-medium leading-none tracking-tight', props.className) })";
const ALERT_DESCRIPTION: &str = "(props) => h('div', { ...props, className: cx('text-sm', props.className) })";

/// Registered kit modules, by last path segment.
static KIT_MODULES: &[(&str, &[MockExport])] = &[
    ("button", &[MockExport::fixed("Button", BUTTON)]),
    ("input", &[MockExport::fixed("Input", INPUT)]),
    ("label", &[MockExport::fixed("Label", LABEL)]),
    ("textarea", &[MockExport::fixed("Textarea", TEXTAREA)]),
    ("checkbox", &[MockExport::fixed("Checkbox", CHECKBOX)]),
    ("switch", &[MockExport::fixed("Switch", SWITCH)]),
    ("separator", &[MockExport::fixed("Separator", SEPARATOR)]),
    (
        "avatar",
        &[
            MockExport::fixed("Avatar", AVATAR),
            MockExport::fixed("AvatarImage", AVATAR_IMAGE),
            MockExport::fixed("AvatarFallback", AVATAR_FALLBACK),
        ],
    ),
    (
        "card",
        &[
            MockExport::fixed("Card", CARD),
            MockExport::fixed("CardHeader", CARD_HEADER),
            MockExport::fixed("CardTitle", CARD_TITLE),
            MockExport::fixed("CardDescription", CARD_DESCRIPTION),
            MockExport::fixed("CardContent", CARD_CONTENT),
            MockExport::fixed("CardFooter", CARD_FOOTER),
        ],
    ),
    ("badge", &[MockExport::fixed("Badge", BADGE)]),
    ("progress", &[MockExport::fixed("Progress", PROGRESS)]),
    ("skeleton", &[MockExport::fixed("Skeleton", SKELETON)]),
    (
        "alert",
        &[
            MockExport::fixed("Alert", ALERT),
            MockExport::fixed("AlertTitle", ALERT_TITLE),
            MockExport::fixed("AlertDescription", ALERT_DESCRIPTION),
        ],
    ),
];

/// JS helpers shared by every mock. `h` and `cx` are used by the table
/// above; `icon` and `placeholder` back the two dynamic fallbacks.
const JS_HELPERS: &str = r"const h = React.createElement;
const cx = (base, extra) => (extra ? base + ' ' + extra : base);
const pascalCase = (segment) => segment.split(/[-_]/).filter(Boolean).map((w) => w.charAt(0).toUpperCase() + w.slice(1)).join('');
const icon = (name) => {
  const Icon = ({ size, color, strokeWidth, ...rest }) => h('svg', { width: size || 24, height: size || 24, viewBox: '0 0 24 24', fill: 'none', stroke: color || 'currentColor', strokeWidth: strokeWidth || 2, strokeLinecap: 'round', strokeLinejoin: 'round', 'data-icon': name, style: { verticalAlign: 'middle' }, ...rest },
    h('rect', { x: 2, y: 2, width: 20, height: 20, rx: 4, ry: 4, strokeDasharray: '4 4', opacity: 0.5 }),
    h('text', { x: 12, y: 16, textAnchor: 'middle', fontSize: 10, fontWeight: 'bold', fill: 'currentColor', stroke: 'none' }, 'Icon'));
  Icon.displayName = name;
  return Icon;
};
const icons = new Proxy({}, {
  get(_target, prop) {
    if (prop === '__esModule') return true;
    if (typeof prop === 'symbol' || prop === 'then') return undefined;
    return icon(String(prop));
  },
});
const placeholder = (segment) => {
  const Placeholder = (props) => h('div', { style: { border: '1px dashed red', padding: '4px' }, 'data-mock': segment, ...props }, 'Mocking ' + segment, props.children);
  Placeholder.displayName = pascalCase(segment);
  return Placeholder;
};
";

// =============================================================================
// REGISTRY
// =============================================================================

/// How an import path is satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Registered,
    /// Unregistered path under the kit prefix; gets a placeholder component.
    Placeholder,
    /// Anything else; gets an empty module.
    Unresolved,
}

/// Process-wide, read-only table of mocked import paths.
#[derive(Debug)]
pub struct ModuleRegistry {
    modules: Vec<(String, MockModule)>,
}

static GLOBAL: LazyLock<ModuleRegistry> = LazyLock::new(ModuleRegistry::new);

impl ModuleRegistry {
    #[must_use]
    pub fn new() -> Self {
        let mut modules: Vec<(String, MockModule)> = KIT_MODULES
            .iter()
            .map(|(segment, exports)| (format!("{COMPONENT_KIT_PREFIX}{segment}"), MockModule::Exports(exports.to_vec())))
            .collect();
        modules.push((ICON_LIBRARY_PATH.to_string(), MockModule::Icons));
        Self { modules }
    }

    /// The shared registry, built on first use.
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Registered import paths, in table order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.modules.iter().map(|(path, _)| path.as_str())
    }

    #[must_use]
    pub fn is_registered(&self, path: &str) -> bool {
        self.lookup(path).is_some()
    }

    fn lookup(&self, path: &str) -> Option<&MockModule> {
        self.modules.iter().find(|(p, _)| p == path).map(|(_, m)| m)
    }

    /// Classify an import path and log a warning for anything that is not
    /// registered. Builds nothing.
    pub fn diagnose(&self, path: &str) -> Resolution {
        if self.is_registered(path) {
            return Resolution::Registered;
        }
        if is_kit_path(path) {
            warn!(path, "registry: unregistered kit import, using placeholder");
            return Resolution::Placeholder;
        }
        warn!(path, "registry: unresolved import, using empty module");
        Resolution::Unresolved
    }

    /// Resolve an import path. Never fails: unregistered kit paths get a
    /// placeholder, everything else an empty module. Both log a warning.
    #[must_use]
    pub fn resolve(&self, path: &str) -> MockModule {
        if let Some(module) = self.lookup(path) {
            return module.clone();
        }
        match self.diagnose(path) {
            Resolution::Placeholder => MockModule::Exports(vec![placeholder_export(path)]),
            Resolution::Registered | Resolution::Unresolved => MockModule::empty(),
        }
    }

    /// Render the JS half of the registry: shared helpers, the icon proxy,
    /// the placeholder factory, and the `mockModules` table.
    #[must_use]
    pub fn render_js(&self) -> String {
        let mut out = String::from(JS_HELPERS);
        let _ = writeln!(
            out,
            "const {JS_PLACEHOLDER_FACTORY} = (path) => {{ const segment = path.replace(/\\/+$/, '').split('/').pop(); return {{ [pascalCase(segment)]: placeholder(segment) }}; }};"
        );
        let _ = writeln!(out, "const {JS_MODULE_TABLE} = {{");
        for (path, module) in &self.modules {
            match module {
                MockModule::Icons => {
                    let _ = writeln!(out, "  {}: icons,", js_string(path));
                }
                MockModule::Exports(exports) => {
                    let _ = writeln!(out, "  {}: {{", js_string(path));
                    for export in exports {
                        let _ = writeln!(out, "    {}: {},", export.name, export.render);
                    }
                    let _ = writeln!(out, "  }},");
                }
            }
        }
        out.push_str("};\n");
        out
    }
}

impl Default for ModuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "registry_test.rs"]
mod tests;
