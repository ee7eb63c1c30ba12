use tracing::debug;

use crate::Result;
use crate::catalog::{
    ModuleRegistry, ParameterDefinition, ParameterValues, TestMethodDescriptor, TestResult,
};
use crate::journal::{Journal, record_execution};
use crate::runner::prompt::Prompter;
use crate::runner::reporter::ResultReporter;

pub const RUN_TEST: &str = "Run a test";
pub const EXIT: &str = "Exit";
pub const BACK: &str = "Back";
pub const MANUAL_ENTRY: &str = "Manual entry";
pub const ACKNOWLEDGE: &str = "Press Enter to return to the main menu...";

/// Position in the nested menus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Main,
    Modules,
    Methods { module: usize },
    Exit,
}

/// Parameter source picked for one execution
enum ParameterSource {
    DataSet(usize),
    Manual,
}

/// Interactive loop: module → method → parameters → execute → result
pub struct TestRunner<P: Prompter> {
    registry: ModuleRegistry,
    journal: Journal,
    prompter: P,
    reporter: ResultReporter,
}

impl<P: Prompter> TestRunner<P> {
    pub fn new(registry: ModuleRegistry, journal: Journal, prompter: P) -> Self {
        Self {
            registry,
            journal,
            prompter,
            reporter: ResultReporter::default(),
        }
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    /// Run until the user chooses "Exit"
    pub async fn run(&mut self) -> Result<()> {
        let mut state = MenuState::Main;
        loop {
            debug!(?state, "Menu transition");
            state = match state {
                MenuState::Main => self.main_menu()?,
                MenuState::Modules => self.module_menu()?,
                MenuState::Methods { module } => self.method_menu(module).await?,
                MenuState::Exit => return Ok(()),
            };
        }
    }

    fn main_menu(&mut self) -> Result<MenuState> {
        self.reporter.print_banner();
        let options = vec![RUN_TEST.to_string(), EXIT.to_string()];

        Ok(match self.prompter.select("Choose an action:", &options)? {
            Some(0) => MenuState::Modules,
            _ => MenuState::Exit,
        })
    }

    fn module_menu(&mut self) -> Result<MenuState> {
        let mut options: Vec<String> = self
            .registry
            .modules()
            .iter()
            .enumerate()
            .map(|(i, m)| format!("{}. {}", i + 1, m.name()))
            .collect();
        options.push(BACK.to_string());

        Ok(
            match self.prompter.select("Choose a module to test:", &options)? {
                Some(i) if i < self.registry.len() => MenuState::Methods { module: i },
                _ => MenuState::Main,
            },
        )
    }

    async fn method_menu(&mut self, module_index: usize) -> Result<MenuState> {
        let Some(module) = self.registry.get(module_index) else {
            return Ok(MenuState::Modules);
        };
        let module_name = module.name().to_string();
        let methods = module.test_methods();

        let mut options: Vec<String> = methods
            .iter()
            .enumerate()
            .map(|(i, m)| format!("{}. {} - {}", i + 1, m.name, m.description))
            .collect();
        options.push(BACK.to_string());

        let selected = match self.prompter.select("Choose a test method:", &options)? {
            Some(i) if i < methods.len() => &methods[i],
            _ => return Ok(MenuState::Modules),
        };

        let Some(parameters) = self.resolve_parameters(selected)? else {
            return Ok(MenuState::Main);
        };

        let result = self.execute(&module_name, selected, parameters).await;
        debug!(success = result.success, "Execution finished");

        self.prompter.acknowledge(ACKNOWLEDGE)?;
        Ok(MenuState::Main)
    }

    /// Pick a data set or enter values by hand. `None` when the user backs out.
    fn resolve_parameters(
        &mut self,
        method: &TestMethodDescriptor,
    ) -> Result<Option<ParameterValues>> {
        let source = if method.data_sets.is_empty() {
            ParameterSource::Manual
        } else {
            let mut options: Vec<String> =
                method.data_sets.iter().map(|ds| ds.name.clone()).collect();
            options.push(MANUAL_ENTRY.to_string());

            match self.prompter.select("Choose a test data set:", &options)? {
                Some(i) if i < method.data_sets.len() => ParameterSource::DataSet(i),
                Some(_) => ParameterSource::Manual,
                None => return Ok(None),
            }
        };

        match source {
            ParameterSource::DataSet(i) => Ok(Some(method.data_sets[i].parameters.clone())),
            ParameterSource::Manual => self.prompt_for_parameters(&method.parameters),
        }
    }

    /// One prompt per declared parameter, in order. Values stay raw text.
    fn prompt_for_parameters(
        &mut self,
        definitions: &[ParameterDefinition],
    ) -> Result<Option<ParameterValues>> {
        let mut values = ParameterValues::new();
        for param in definitions {
            let message = format!(
                "Enter value for {} ({}, {}):",
                param.name, param.description, param.param_type
            );
            match self.prompter.text(&message)? {
                Some(input) => values.insert(param.name.clone(), input),
                None => return Ok(None),
            }
        }
        Ok(Some(values))
    }

    /// Invoke the delegate, journal the call and show the outcome
    pub async fn execute(
        &self,
        module_name: &str,
        method: &TestMethodDescriptor,
        parameters: ParameterValues,
    ) -> TestResult {
        self.reporter.print_running(&method.name);
        let result = method.execute(parameters.clone()).await;

        record_execution(&self.journal, module_name, &method.name, &parameters, &result);

        self.reporter.print_result(&result, &parameters);
        result
    }
}
