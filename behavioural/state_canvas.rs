// Behavioural Pattern: State (canvas tools)
// The canvas forwards mouse events to whichever tool is active, so the same
// input does different things depending on the selected tool.

use design_patterns::console;

trait Tool {
    fn on_mouse_down(&self) -> &'static str;
    fn on_mouse_up(&self) -> &'static str;
}

struct SelectionTool;

impl Tool for SelectionTool {
    fn on_mouse_down(&self) -> &'static str {
        "Selection rectangle started."
    }

    fn on_mouse_up(&self) -> &'static str {
        "Selection rectangle drawn."
    }
}

struct BrushTool;

impl Tool for BrushTool {
    fn on_mouse_down(&self) -> &'static str {
        "Brush stroke started."
    }

    fn on_mouse_up(&self) -> &'static str {
        "Brush stroke drawn."
    }
}

struct EraserTool;

impl Tool for EraserTool {
    fn on_mouse_down(&self) -> &'static str {
        "Eraser started."
    }

    fn on_mouse_up(&self) -> &'static str {
        "Erased."
    }
}

struct Canvas {
    tool: Box<dyn Tool>,
}

impl Canvas {
    fn new(tool: Box<dyn Tool>) -> Self {
        Self { tool }
    }

    fn set_tool(&mut self, tool: Box<dyn Tool>) {
        self.tool = tool;
    }

    fn on_mouse_down(&self) -> &'static str {
        self.tool.on_mouse_down()
    }

    fn on_mouse_up(&self) -> &'static str {
        self.tool.on_mouse_up()
    }

    /// One full press-and-release with the active tool.
    fn click(&self) -> [&'static str; 2] {
        [self.on_mouse_down(), self.on_mouse_up()]
    }
}


fn main() {
    console::banner("State Pattern (canvas tools)");

    let tools: Vec<(&str, Box<dyn Tool>)> = vec![
        ("brush", Box::new(BrushTool) as Box<dyn Tool>),
        ("eraser", Box::new(EraserTool) as Box<dyn Tool>),
    ];

    let mut canvas = Canvas::new(Box::new(SelectionTool));
    console::step("Active tool: selection");
    for line in canvas.click() {
        console::outcome(line);
    }

    for (name, tool) in tools {
        canvas.set_tool(tool);
        console::step(format!("Active tool: {}", name));
        for line in canvas.click() {
            console::outcome(line);
        }
    }

    console::when_to_use("state-canvas");
}
