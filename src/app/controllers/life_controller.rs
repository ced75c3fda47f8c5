use super::super::*;

pub(in crate::app) fn execute(app: &mut App, action: Action) {
    // 탭 키는 어느 섹션에서든 생활 섹션으로 데려감
    app.go_to_section(Section::Life);
    match action {
        Action::NextTab => app.life.next(),
        Action::PrevTab => app.life.prev(),
        Action::SelectTab(number) => {
            if let Err(e) = app.life.select_nth(number) {
                warn!(number, error = %e, "tab selection rejected");
                app.set_toast(&format!("No tab {}", number));
            }
        }
        _ => unreachable!("non-tab action: {:?}", action),
    }
}
