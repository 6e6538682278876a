use crate::app::console::Console;
use crate::app::render::{render_breed, render_match, render_preferences, SEPARATOR};
use crate::core::fetcher::BreedRepository;
use crate::core::matcher::find_matches;
use crate::core::pager::{PageCommand, PageMove, Pager};
use crate::domain::model::{Directory, Species};
use crate::domain::ports::BreedApi;
use crate::domain::preferences::{criteria_for, parse_answer, PreferenceSet};
use std::io::{self, BufRead, Write};

const INVALID_COMMAND: &str = "Invalid command";

/// 互動式主程式：主選單、瀏覽與配對問卷
pub struct App<A: BreedApi, R, W> {
    repository: BreedRepository<A>,
    directory: Directory,
    console: Console<R, W>,
}

impl<A: BreedApi, R: BufRead, W: Write> App<A, R, W> {
    pub fn new(repository: BreedRepository<A>, directory: Directory, console: Console<R, W>) -> Self {
        Self {
            repository,
            directory,
            console,
        }
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// 主選單迴圈，使用者選擇離開或輸入結束時返回
    pub async fn run(&mut self) -> io::Result<()> {
        loop {
            self.console.clear()?;
            self.console.print("=== Main menu ===")?;
            self.console.print("1 - Browse breeds (page by page)")?;
            self.console.print("2 - Pet selection test")?;
            self.console.print("0 - Exit")?;

            let Some(choice) = self.console.prompt("Choose an action: ")? else {
                return Ok(());
            };

            match choice.as_str() {
                "0" => return Ok(()),
                "1" => {
                    let combined = self.directory.interleaved();
                    self.page_through(&combined, None).await?;
                }
                "2" => self.selection_menu().await?,
                _ => self.invalid_command()?,
            }
        }
    }

    async fn selection_menu(&mut self) -> io::Result<()> {
        self.console.clear()?;
        self.console.print("=== Pet selection ===")?;

        loop {
            self.console.print("-Choose the type of animal:")?;
            self.console.print("1 - Cat")?;
            self.console.print("2 - Dog")?;
            self.console.print("0 - Back")?;

            let Some(choice) = self.console.prompt("Choice: ")? else {
                return Ok(());
            };

            match choice.as_str() {
                "0" => return Ok(()),
                "1" => self.questionnaire(Species::Cat).await?,
                "2" => self.questionnaire(Species::Dog).await?,
                _ => {
                    self.console.print("Invalid value")?;
                    self.console.pause()?;
                }
            }
        }
    }

    /// 依序提問；第一個無效答案就放棄整份問卷
    fn collect_preferences(&mut self, species: Species) -> io::Result<Option<PreferenceSet>> {
        let mut answers = Vec::new();

        for criterion in criteria_for(species) {
            self.console.print(&format!("\n-{}", criterion.question))?;
            let Some(input) = self.console.prompt("Answer: ")? else {
                return Ok(None);
            };

            match parse_answer(&input) {
                Ok(answer) => answers.push(answer),
                Err(e) => {
                    tracing::debug!("Questionnaire aborted at {}: {}", criterion.field, e);
                    self.console.print(&e.to_string())?;
                    return Ok(None);
                }
            }
        }

        match PreferenceSet::new(species, answers) {
            Ok(preferences) => Ok(Some(preferences)),
            Err(e) => {
                self.console.print(&e.user_friendly_message())?;
                Ok(None)
            }
        }
    }

    async fn questionnaire(&mut self, species: Species) -> io::Result<()> {
        let Some(preferences) = self.collect_preferences(species)? else {
            return Ok(());
        };

        let candidates = self.directory.breeds(species).to_vec();
        self.console
            .print(&format!("\nChecking {} {} breeds...", candidates.len(), species))?;

        let matched = find_matches(&mut self.repository, &candidates, &preferences).await;
        if matched.is_empty() {
            self.console.print("\nNo breeds match your criteria.")?;
            return self.console.pause();
        }

        let items: Vec<(Species, String)> = matched.into_iter().map(|name| (species, name)).collect();
        self.page_through(&items, Some(&preferences)).await
    }

    /// 一頁一筆，每次顯示時透過 repository 取得資料
    async fn page_through(
        &mut self,
        items: &[(Species, String)],
        preferences: Option<&PreferenceSet>,
    ) -> io::Result<()> {
        let Some(mut pager) = Pager::new(items.len()) else {
            return Ok(());
        };

        loop {
            self.console.clear()?;
            let (species, name) = &items[pager.index()];
            let detail = self.repository.detail(*species, name).await;

            match preferences {
                None => {
                    self.console
                        .print(&format!("Page {}/{}", pager.page(), pager.last_page()))?;
                    self.console.print(&format!("\n--- {} ---", species.label()))?;
                    self.console.print(&render_breed(&detail))?;
                }
                Some(preferences) => {
                    self.console.print(&format!(
                        "=== Matching {} breeds (page {}/{}) ===",
                        species,
                        pager.page(),
                        pager.last_page()
                    ))?;
                    self.console.print(&render_preferences(preferences))?;
                    self.console.print(SEPARATOR)?;
                    self.console.print(&render_match(&detail, preferences))?;
                }
            }
            self.console.print(SEPARATOR)?;

            let Some(choice) = self.console.prompt(&pager.menu())? else {
                return Ok(());
            };

            match PageCommand::parse(&choice).map(|command| pager.apply(command)) {
                Some(PageMove::Exit) => return Ok(()),
                Some(PageMove::Moved) => {}
                Some(PageMove::Rejected) | None => self.invalid_command()?,
            }
        }
    }

    fn invalid_command(&mut self) -> io::Result<()> {
        self.console.print(INVALID_COMMAND)?;
        self.console.pause()
    }
}
