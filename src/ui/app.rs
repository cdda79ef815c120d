//! Main window: question box, example chips, answer area
use crate::config::{BackendConfig, Config};
use crate::core::ask::{ask, EMPTY_QUESTION_PROMPT};
use crate::core::Dispatcher;
use eframe::egui;
use std::sync::mpsc as std_mpsc;
use std::sync::Arc;

const ASK_LABEL: &str = "Ask a Local";
const THINKING_LABEL: &str = "Thinking...";
const LOADING_TEXT: &str = "Thinking like a local...";

pub const EXAMPLE_QUESTIONS: &[&str] = &[
    "Should I go to Whitefield at 6 PM?",
    "Is it safe to eat pani puri after dark?",
    "Metro or cab to MG Road during peak hours?",
    "How early should I leave for the airport?",
    "Will my food delivery be late in the rain?",
    "Toit on a Friday evening?",
];

pub struct LocalApp {
    config: Config,
    dispatcher: Arc<Dispatcher>,
    backends: Arc<BackendConfig>,
    input_text: String,
    output_text: String,
    is_thinking: bool,
    response_receiver: std_mpsc::Receiver<String>,
    response_sender: std_mpsc::Sender<String>,
}

impl LocalApp {
    pub fn new(config: Config) -> Self {
        let dispatcher = Arc::new(Dispatcher::from_config(&config));
        let backends = Arc::new(config.backends.clone());
        let (sender, receiver) = std_mpsc::channel();

        Self {
            config,
            dispatcher,
            backends,
            input_text: String::new(),
            output_text: String::new(),
            is_thinking: false,
            response_receiver: receiver,
            response_sender: sender,
        }
    }

    fn set_example(&mut self, example: &str) {
        self.input_text = example.to_string();
    }

    fn send_question(&mut self, ctx: &egui::Context) {
        if self.is_thinking {
            return;
        }

        if self.input_text.trim().is_empty() {
            self.output_text = EMPTY_QUESTION_PROMPT.to_string();
            return;
        }

        self.output_text = LOADING_TEXT.to_string();
        self.is_thinking = true;

        let question = self.input_text.clone();
        let dispatcher = Arc::clone(&self.dispatcher);
        let backends = Arc::clone(&self.backends);
        let sender = self.response_sender.clone();
        let ctx_clone = ctx.clone();

        tokio::spawn(async move {
            let answer = ask(dispatcher, backends, &question).await;

            if let Err(e) = sender.send(answer) {
                log::error!("Failed to deliver answer to UI: {}", e);
            }

            ctx_clone.request_repaint();
        });
    }

    fn receive_answers(&mut self) {
        while let Ok(answer) = self.response_receiver.try_recv() {
            self.output_text = answer;
            self.is_thinking = false;
        }
    }
}

impl eframe::App for LocalApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.receive_answers();

        let mut example_clicked: Option<&'static str> = None;
        let mut submit = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(self.config.app_title.as_str());
            ui.label("Traffic, food, autos and timing, answered the way a local would.");
            ui.add_space(8.0);

            ui.horizontal_wrapped(|ui| {
                for example in EXAMPLE_QUESTIONS {
                    if ui.small_button(*example).clicked() {
                        example_clicked = Some(*example);
                    }
                }
            });
            ui.add_space(8.0);

            let input = ui.add(
                egui::TextEdit::multiline(&mut self.input_text)
                    .hint_text("Ask about traffic, food, autos, timing...")
                    .desired_rows(3)
                    .desired_width(f32::INFINITY),
            );
            // Ctrl+Enter submits, plain Enter is a newline
            if input.has_focus() && ui.input(|i| i.modifiers.ctrl && i.key_pressed(egui::Key::Enter)) {
                submit = true;
            }

            let label = if self.is_thinking { THINKING_LABEL } else { ASK_LABEL };
            if ui.add_enabled(!self.is_thinking, egui::Button::new(label)).clicked() {
                submit = true;
            }

            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| {
                if self.is_thinking {
                    ui.label(egui::RichText::new(self.output_text.as_str()).italics().weak());
                } else {
                    ui.label(self.output_text.as_str());
                }
            });
        });

        if let Some(example) = example_clicked {
            self.set_example(example);
        }
        if submit {
            self.send_question(ctx);
        }
    }
}
