use leptos::prelude::*;
use leptos_ui::variants;

variants! {
    Button {
        base: "inline-flex items-center justify-center gap-2 whitespace-nowrap rounded-md text-sm font-medium transition-all disabled:pointer-events-none disabled:opacity-50 [&_svg]:pointer-events-none [&_svg:not([class*='size-'])]:size-4 shrink-0 [&_svg]:shrink-0 outline-none focus-visible:border-ring focus-visible:ring-ring/50 focus-visible:ring-[3px] hover:cursor-pointer active:scale-[0.98] select-none",
        variants: {
            variant: {
                Default: "bg-primary text-primary-foreground shadow-xs hover:bg-primary/90",
                Destructive: "bg-destructive text-white shadow-xs hover:bg-destructive/90 focus-visible:ring-destructive/20",
                Outline: "border bg-border/30 shadow-xs hover:bg-border/50 hover:text-foreground",
                Secondary: "bg-secondary text-secondary-foreground shadow-xs hover:bg-secondary/80",
                Ghost: "hover:bg-accent hover:text-accent-foreground",
            },
            size: {
                Default: "h-9 px-4 py-2 has-[>svg]:px-3",
                // Extended "fab" look of the dialog actions.
                Pill: "h-8 rounded-full gap-1.5 px-4 has-[>svg]:px-3 text-xs uppercase tracking-wide",
                Sm: "h-8 rounded-md gap-1.5 px-3 has-[>svg]:px-2.5",
                Icon: "size-8",
            }
        },
        component: {
            element: button
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tw_merge::*;

    #[test]
    fn test_button_class_merges_variant_and_size() {
        let class = ButtonClass {
            variant: ButtonVariant::Destructive,
            size: ButtonSize::Icon,
        }
        .to_class();
        assert!(class.contains("bg-destructive"));
        assert!(class.contains("size-8"));
        assert!(class.contains("inline-flex"));
    }

    #[test]
    fn test_button_class_defaults() {
        let class = ButtonClass {
            variant: ButtonVariant::default(),
            size: ButtonSize::default(),
        }
        .with_class("mt-2");
        assert!(class.contains("bg-primary"));
        assert!(class.contains("h-9"));
        assert!(class.contains("mt-2"));
    }
}
