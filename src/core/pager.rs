/// 分頁指令：1 下一頁、2 上一頁、0 離開
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageCommand {
    Next,
    Previous,
    Exit,
}

impl PageCommand {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(PageCommand::Next),
            "2" => Some(PageCommand::Previous),
            "0" => Some(PageCommand::Exit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMove {
    Moved,
    Rejected,
    Exit,
}

/// 一頁一筆的分頁狀態，頁碼從 1 開始
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    page: usize,
    last_page: usize,
}

impl Pager {
    /// 沒有項目時回傳 None
    pub fn new(items: usize) -> Option<Self> {
        (items > 0).then_some(Self {
            page: 1,
            last_page: items,
        })
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn last_page(&self) -> usize {
        self.last_page
    }

    /// 目前項目在清單中的位置（0 起算）
    pub fn index(&self) -> usize {
        self.page - 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.last_page
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn apply(&mut self, command: PageCommand) -> PageMove {
        match command {
            PageCommand::Exit => PageMove::Exit,
            PageCommand::Next if self.has_next() => {
                self.page += 1;
                PageMove::Moved
            }
            PageCommand::Previous if self.has_previous() => {
                self.page -= 1;
                PageMove::Moved
            }
            _ => PageMove::Rejected,
        }
    }

    /// 只列出目前頁面可用的操作
    pub fn menu(&self) -> String {
        let mut menu = String::new();
        if self.has_next() {
            menu.push_str("1 - Next breed\n");
        }
        if self.has_previous() {
            menu.push_str("2 - Previous breed\n");
        }
        menu.push_str("0 - Exit\nEnter an action: ");
        menu
    }
}
