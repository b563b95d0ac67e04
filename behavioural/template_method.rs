// Behavioural Pattern: Template Method
// `bake_cake` fixes the order of the steps. Recipes must say how to mix the
// ingredients and may override any other step.

use design_patterns::console;

trait CakeRecipe {
    /// The template: preheat, mix, bake, cool, decorate.
    fn bake_cake(&self) -> Vec<String> {
        vec![
            self.pre_heat_oven(),
            self.mix_ingredients(),
            self.bake(),
            self.cooling_down(),
            self.decorate(),
        ]
    }

    fn pre_heat_oven(&self) -> String {
        "Preheating oven to 175 Degree C".to_string()
    }

    fn mix_ingredients(&self) -> String;

    fn bake(&self) -> String {
        "Baking cake ....".to_string()
    }

    fn cooling_down(&self) -> String {
        "Cooling down the cake ...".to_string()
    }

    fn decorate(&self) -> String {
        "Decorating cake ...".to_string()
    }
}

struct ChocolateCake;

impl CakeRecipe for ChocolateCake {
    fn mix_ingredients(&self) -> String {
        "Mixing: chocolate, sugar, butter, flour, eggs".to_string()
    }

    fn decorate(&self) -> String {
        "Decorating cake with chocolate".to_string()
    }
}

struct VanillaCake;

impl CakeRecipe for VanillaCake {
    fn mix_ingredients(&self) -> String {
        "Mixing: vanilla extract, sugar, butter, flour, eggs".to_string()
    }
}

fn bake(cake: &dyn CakeRecipe) {
    for step in cake.bake_cake() {
        console::step(step);
    }
    console::outcome("Cake is ready");
}


fn main() {
    console::banner("Template Method Pattern");

    console::outcome("Baking a chocolate cake");
    bake(&ChocolateCake);
    println!();

    console::outcome("Baking a vanilla cake");
    bake(&VanillaCake);

    console::when_to_use("template-method");
}
