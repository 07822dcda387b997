//! Stage builder macro
//!
//! Use a declarative macro to eliminate the repetitive builder template
//! shared by every stage.

/// Define a stage builder.
///
/// Generates the builder struct, one setter per recognized option, the
/// common `inputs`/`tag` setters, the `option()` escape hatch, `build()`,
/// conversions into `Stage`/`PipelineElement`, and a lowercase constructor
/// function matching the engine's stage name.
///
/// Options whose engine key is not a usable Rust method name declare the
/// wire key explicitly:
///
/// ```ignore
/// define_stage!(
///     /// Write E57 files.
///     E57Writer, "writers.e57", e57 {
///         double_precision => "doublePrecision",
///     }
/// );
/// ```
macro_rules! define_stage {
    (@key $opt:ident) => {
        stringify!($opt)
    };
    (@key $opt:ident => $key:literal) => {
        $key
    };
    (
        $(#[$struct_meta:meta])*
        $name:ident, $stage_type:literal, $ctor:ident {
            $(
                $(#[$opt_meta:meta])*
                $opt:ident $(=> $key:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$struct_meta])*
        #[derive(Debug, Clone, Default)]
        pub struct $name {
            options: contracts::StageOptions,
        }

        impl $name {
            /// Identifier emitted in the descriptor's `type` field.
            pub const STAGE_TYPE: &'static str = $stage_type;

            pub fn new() -> Self {
                Self::default()
            }

            $(
                $(#[$opt_meta])*
                pub fn $opt(mut self, value: impl Into<serde_json::Value>) -> Self {
                    self.options.set(define_stage!(@key $opt $(=> $key)?), value);
                    self
                }
            )*

            /// Explicit tags of the upstream stages feeding this one.
            pub fn inputs(mut self, value: impl Into<serde_json::Value>) -> Self {
                self.options.set("inputs", value);
                self
            }

            /// Tag that downstream stages may reference in their `inputs`.
            pub fn tag(mut self, value: impl Into<serde_json::Value>) -> Self {
                self.options.set("tag", value);
                self
            }

            /// Set an option without a named setter. Applied after named
            /// options; wins on name collision.
            pub fn option(
                mut self,
                name: impl Into<String>,
                value: impl Into<serde_json::Value>,
            ) -> Self {
                self.options.set_extra(name, value);
                self
            }

            /// Assemble the stage descriptor.
            pub fn build(self) -> contracts::Stage {
                self.options.into_stage(Self::STAGE_TYPE)
            }
        }

        impl From<$name> for contracts::Stage {
            fn from(builder: $name) -> Self {
                builder.build()
            }
        }

        impl From<$name> for contracts::PipelineElement {
            fn from(builder: $name) -> Self {
                contracts::PipelineElement::Stage(builder.build())
            }
        }

        #[doc = concat!("Start a `", $stage_type, "` stage.")]
        pub fn $ctor() -> $name {
            $name::new()
        }
    };
}
