use colorkit::error::ColorFormatError;
use colorkit::palette::{ShadeStep, UtilityCategory, UtilityPalette};
use colorkit::provider::{Appearance, ColorProvider, ReferenceResolver};

fn main() -> Result<(), ColorFormatError> {
    // 1. Print the utility palette
    let palette = UtilityPalette::get();
    for category in UtilityCategory::all() {
        println!("{}", category.name());
        for step in ShadeStep::all() {
            let shade = &palette.shade(category)[step];
            println!("    {:>3}  {}  {}", step.weight(), shade.light, shade.dark);
        }
    }

    // 2. Resolve color providers given on the command line
    for raw in std::env::args().skip(1) {
        let provider: ColorProvider = raw.parse()?;
        let light = provider.resolve(&ReferenceResolver, None);
        let lch = light.to_lch();
        println!(
            "\n{}\n    {}  L={:.2} C={:.2} h={:.1}",
            provider, light, lch.luminance, lch.chroma, lch.hue
        );

        if let ColorProvider::SemanticColor(color) = provider {
            println!("    dark {}", color.reference(Appearance::Dark));
        }
    }

    Ok(())
}
