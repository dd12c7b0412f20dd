//! Macros that generate the per-widget-type surface.
//!
//! Every widget type gets the same three things: a typed view over
//! [`Widget`](crate::Widget), a builder function in [`builders`](crate::builders)
//! and a registration shorthand on [`Stylesheet`](crate::Stylesheet). Writing
//! those by hand for each type is pure boilerplate, so they are stamped out
//! here from one table.

/// Declares a typed view over [`Widget`](crate::Widget).
///
/// The view is a newtype around the handle that derefs to it and implements
/// [`StyleTarget`](crate::StyleTarget) and [`Buildable`](crate::builders::Buildable).
/// `accepts [..]` lists additional kinds the view can stand for, the way a
/// subclass can stand for its base class.
///
/// # Usage
///
/// ```ignore
/// widget_view! {
///     /// A clickable button.
///     Button => Button
/// }
///
/// widget_view! {
///     Panel => Panel, accepts [BorderPane]
/// }
/// ```
macro_rules! widget_view {
    ($(#[$meta:meta])* $view:ident => $kind:ident $(, accepts [$($extra:ident),* $(,)?])?) => {
        $(#[$meta])*
        #[derive(Clone)]
        pub struct $view(pub(crate) $crate::Widget);

        impl $view {
            /// The kind a fresh instance of this view is created with.
            pub const KIND: $crate::WidgetKind = $crate::WidgetKind::$kind;

            pub fn widget(&self) -> &$crate::Widget {
                &self.0
            }

            pub fn into_widget(self) -> $crate::Widget {
                self.0
            }

            pub fn with_name(self, name: impl Into<String>) -> Self {
                self.0.set_name(name);
                self
            }

            pub fn with_classes(self, classes: &str) -> Self {
                self.0.set_classes(classes);
                self
            }
        }

        impl ::std::ops::Deref for $view {
            type Target = $crate::Widget;

            fn deref(&self) -> &$crate::Widget {
                &self.0
            }
        }

        impl AsRef<$crate::Widget> for $view {
            fn as_ref(&self) -> &$crate::Widget {
                &self.0
            }
        }

        impl From<$view> for $crate::Widget {
            fn from(view: $view) -> $crate::Widget {
                view.0
            }
        }

        impl ::std::fmt::Debug for $view {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}({})", stringify!($view), self.0.describe())
            }
        }

        impl $crate::StyleTarget for $view {
            const TYPE_NAME: &'static str = stringify!($view);

            fn accepts(widget: &$crate::Widget) -> bool {
                matches!(
                    widget.kind(),
                    $crate::WidgetKind::$kind $($(| $crate::WidgetKind::$extra)*)?
                )
            }

            fn cast(widget: &$crate::Widget) -> Option<Self> {
                Self::accepts(widget).then(|| $view(widget.clone()))
            }
        }

        impl $crate::builders::Buildable for $view {
            fn build_default() -> Self {
                <$view as Default>::default()
            }

            fn as_widget(&self) -> &$crate::Widget {
                &self.0
            }
        }
    };
}

/// Generates one builder function per view:
/// `fn $name(parent: &Widget, init: impl FnOnce(&View)) -> View`.
macro_rules! builder_fns {
    ($($(#[$meta:meta])* $name:ident => $view:ty;)*) => {
        $(
            $(#[$meta])*
            pub fn $name(parent: &$crate::Widget, init: impl FnOnce(&$view)) -> $view {
                build::<$view>(parent, init)
            }
        )*
    };
}

/// Generates one registration shorthand per view on `Stylesheet`:
/// `fn $name(&mut self, selector: &str, f: impl Fn(&View)) -> Result<StyleRef>`.
macro_rules! stylesheet_shorthands {
    ($($name:ident => $view:ty;)*) => {
        impl $crate::Stylesheet {
            $(
                #[doc = concat!("Registers a style for `", stringify!($view), "` widgets matching `selector`.")]
                pub fn $name(
                    &mut self,
                    selector: &str,
                    mutation: impl Fn(&$view) + 'static,
                ) -> $crate::Result<$crate::StyleRef> {
                    self.register_fn::<$view>(selector, mutation)
                }
            )*
        }
    };
}
