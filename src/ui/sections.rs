//! The scrolled page: hero with stats, about, skills, projects,
//! certificates, and the contact section. Layout is computed in code so
//! scroll geometry (section tops, card visibility) stays exact.

use fltk::{
    app::Sender,
    button::Button,
    enums::{Align, Event, Font, FrameType},
    frame::Frame,
    group::{Group, Scroll, ScrollType},
    prelude::*,
};

use crate::app::domain::{Message, Portfolio, SectionId};
use crate::app::services::sections::HEADER_OFFSET;
use crate::ui::contact_form::ContactForm;
use crate::ui::theme::Palette;

const SCROLLBAR_GUTTER: i32 = 18;
const CONTENT_MAX_W: i32 = 760;
const SECTION_PAD: i32 = 48;
const TITLE_H: i32 = 40;
const CARD_PAD: i32 = 14;

pub struct StatWidgets {
    pub value: Frame,
    label: Frame,
}

pub struct ProjectCard {
    pub group: Group,
    title: Frame,
    summary: Frame,
    tech: Frame,
    preview_btn: Button,
    link_btn: Option<Button>,
}

pub struct CertificateCard {
    pub group: Group,
    title: Frame,
    meta: Frame,
    preview_btn: Button,
}

struct SectionBlock {
    id: SectionId,
    group: Group,
    title: Option<Frame>,
}

pub struct PageSections {
    pub scroll: Scroll,
    content: Group,
    blocks: Vec<SectionBlock>,
    hero_name: Frame,
    hero_tagline: Frame,
    stats_row: Group,
    stats: Vec<StatWidgets>,
    about_block: Group,
    about_body: Frame,
    skill_blocks: Vec<(Group, Frame, Frame)>,
    pub projects: Vec<ProjectCard>,
    pub certificates: Vec<CertificateCard>,
    contact_hint: Frame,
    pub form: ContactForm,
    portfolio: Portfolio,
}

/// Rough wrapped-text height for layout purposes.
fn est_height(text: &str, width: i32, size: i32) -> i32 {
    let char_w = (size * 11 / 20).max(4);
    let per_line = (width / char_w).max(10) as usize;
    let lines: usize = text
        .split('\n')
        .map(|line| line.chars().count().div_ceil(per_line).max(1))
        .sum();
    lines as i32 * (size + 7)
}

fn section_title(text: &str) -> Frame {
    let mut title = Frame::new(0, 0, 0, TITLE_H, None);
    title.set_label(text);
    title.set_label_size(24);
    title.set_label_font(Font::HelveticaBold);
    title.set_align(Align::Inside | Align::Left);
    title
}

fn body_frame(text: &str, size: i32) -> Frame {
    let mut frame = Frame::new(0, 0, 0, 0, None);
    frame.set_label(text);
    frame.set_label_size(size);
    frame.set_align(Align::Inside | Align::Left | Align::Top | Align::Wrap);
    frame
}

impl PageSections {
    pub fn build(sender: &Sender<Message>, portfolio: &Portfolio, w: i32, h: i32) -> Self {
        let mut scroll = Scroll::new(0, HEADER_OFFSET, w, h - HEADER_OFFSET, None);
        scroll.set_type(ScrollType::Vertical);
        scroll.set_frame(FrameType::FlatBox);

        let s = *sender;
        scroll.handle(move |_, ev| {
            if ev == Event::MouseWheel {
                s.send(Message::ScrollChanged);
            }
            false
        });
        let s = *sender;
        scroll.scrollbar().set_callback(move |_| s.send(Message::ScrollChanged));

        let mut content = Group::new(0, HEADER_OFFSET, w, 10, None);

        let mut blocks = Vec::new();

        // Hero
        let mut hero_group = Group::new(0, 0, 10, 10, None);
        let mut hero_name = Frame::new(0, 0, 0, 0, None);
        hero_name.set_label(&portfolio.owner.name);
        hero_name.set_label_size(34);
        hero_name.set_label_font(Font::HelveticaBold);
        hero_name.set_align(Align::Inside | Align::Left);
        let hero_tagline = body_frame(&portfolio.owner.tagline, 15);
        let mut stats_row = Group::new(0, 0, 10, 10, None);
        let mut stats = Vec::new();
        for stat in &portfolio.stats {
            let mut value = Frame::new(0, 0, 0, 0, None);
            value.set_label(&stat.value);
            value.set_label_size(28);
            value.set_label_font(Font::HelveticaBold);
            let mut label = Frame::new(0, 0, 0, 0, None);
            label.set_label(&stat.label);
            label.set_label_size(12);
            stats.push(StatWidgets { value, label });
        }
        stats_row.end();
        hero_group.end();
        blocks.push(SectionBlock {
            id: SectionId::Home,
            group: hero_group,
            title: None,
        });

        // About
        let mut about_group = Group::new(0, 0, 10, 10, None);
        let about_title = section_title("About");
        let mut about_block = Group::new(0, 0, 10, 10, None);
        let about_body = body_frame(&portfolio.owner.about, 14);
        about_block.end();
        about_block.deactivate();
        about_group.end();
        blocks.push(SectionBlock {
            id: SectionId::About,
            group: about_group,
            title: Some(about_title),
        });

        // Skills
        let mut skills_group = Group::new(0, 0, 10, 10, None);
        let skills_title = section_title("Skills");
        let mut skill_blocks = Vec::new();
        for group in &portfolio.skills {
            let mut block = Group::new(0, 0, 10, 10, None);
            let mut name = Frame::new(0, 0, 0, 0, None);
            name.set_label(&group.group);
            name.set_label_size(14);
            name.set_label_font(Font::HelveticaBold);
            name.set_align(Align::Inside | Align::Left);
            let items = body_frame(&group.items.join("  \u{00b7}  "), 13);
            block.end();
            block.deactivate();
            skill_blocks.push((block, name, items));
        }
        skills_group.end();
        blocks.push(SectionBlock {
            id: SectionId::Skills,
            group: skills_group,
            title: Some(skills_title),
        });

        // Projects
        let mut projects_group = Group::new(0, 0, 10, 10, None);
        let projects_title = section_title("Projects");
        let mut projects = Vec::new();
        for (i, project) in portfolio.projects.iter().enumerate() {
            let mut card = Group::new(0, 0, 10, 10, None);
            card.set_frame(FrameType::BorderBox);
            let mut title = Frame::new(0, 0, 0, 0, None);
            title.set_label(&project.title);
            title.set_label_size(16);
            title.set_label_font(Font::HelveticaBold);
            title.set_align(Align::Inside | Align::Left);
            let summary = body_frame(&project.summary, 13);
            let mut tech = Frame::new(0, 0, 0, 0, None);
            tech.set_label(&project.technology);
            tech.set_label_size(11);
            tech.set_align(Align::Inside | Align::Left);
            let mut preview_btn = Button::new(0, 0, 0, 0, "Preview");
            preview_btn.set_label_size(12);
            let s = *sender;
            preview_btn.set_callback(move |_| s.send(Message::OpenProjectPreview(i)));
            let link_btn = project.link.as_ref().map(|_| {
                let mut btn = Button::new(0, 0, 0, 0, "Open Link");
                btn.set_label_size(12);
                let s = *sender;
                btn.set_callback(move |_| s.send(Message::OpenProjectLink(i)));
                btn
            });
            card.end();
            card.deactivate();
            projects.push(ProjectCard {
                group: card,
                title,
                summary,
                tech,
                preview_btn,
                link_btn,
            });
        }
        projects_group.end();
        blocks.push(SectionBlock {
            id: SectionId::Projects,
            group: projects_group,
            title: Some(projects_title),
        });

        // Certificates
        let mut certs_group = Group::new(0, 0, 10, 10, None);
        let certs_title = section_title("Certificates");
        let mut certificates = Vec::new();
        for (i, cert) in portfolio.certificates.iter().enumerate() {
            let mut card = Group::new(0, 0, 10, 10, None);
            card.set_frame(FrameType::BorderBox);
            let mut title = Frame::new(0, 0, 0, 0, None);
            title.set_label(&cert.title);
            title.set_label_size(14);
            title.set_label_font(Font::HelveticaBold);
            title.set_align(Align::Inside | Align::Left);
            let mut meta = Frame::new(0, 0, 0, 0, None);
            meta.set_label(&format!("{} \u{00b7} {}", cert.issuer, cert.year));
            meta.set_label_size(12);
            meta.set_align(Align::Inside | Align::Left);
            let mut preview_btn = Button::new(0, 0, 0, 0, "Preview");
            preview_btn.set_label_size(12);
            let s = *sender;
            preview_btn.set_callback(move |_| s.send(Message::OpenCertificatePreview(i)));
            card.end();
            card.deactivate();
            certificates.push(CertificateCard {
                group: card,
                title,
                meta,
                preview_btn,
            });
        }
        certs_group.end();
        blocks.push(SectionBlock {
            id: SectionId::Certificates,
            group: certs_group,
            title: Some(certs_title),
        });

        // Contact
        let mut contact_group = Group::new(0, 0, 10, 10, None);
        let contact_title = section_title("Contact");
        let mut contact_hint = body_frame(
            &format!("Or reach me directly at {}", portfolio.contact.email),
            13,
        );
        contact_hint.set_align(Align::Inside | Align::Left);
        let form = ContactForm::build(sender);
        contact_group.end();
        blocks.push(SectionBlock {
            id: SectionId::Contact,
            group: contact_group,
            title: Some(contact_title),
        });

        content.end();
        scroll.end();

        let mut page = Self {
            scroll,
            content,
            blocks,
            hero_name,
            hero_tagline,
            stats_row,
            stats,
            about_block,
            about_body,
            skill_blocks,
            projects,
            certificates,
            contact_hint,
            form,
            portfolio: portfolio.clone(),
        };
        page.relayout(w, h);
        page
    }

    /// Recompute the whole column for a new window size.
    pub fn relayout(&mut self, w: i32, h: i32) {
        let kept = self.scroll_y();
        self.scroll.scroll_to(0, 0);
        self.scroll
            .resize(0, HEADER_OFFSET, w, (h - HEADER_OFFSET).max(1));

        let total = self.apply_layout();
        let sx = self.scroll.x();
        let sy = self.scroll.y();
        self.content
            .resize(sx, sy, w - SCROLLBAR_GUTTER, total);
        // The group resize rescales children; a second pass pins them.
        self.apply_layout();

        let restored = kept.clamp(0, self.max_scroll());
        if restored > 0 {
            self.scroll.scroll_to(0, restored);
        }
        self.scroll.redraw();
    }

    /// Position every widget. Heights are computed before each group is
    /// resized: FLTK groups rescale their children on resize, so children
    /// are always placed after their parent has its final box.
    fn apply_layout(&mut self) -> i32 {
        let sx = self.scroll.x();
        let sy = self.scroll.y();
        let avail = self.scroll.w() - SCROLLBAR_GUTTER;
        let cw = (avail - 2 * SECTION_PAD).min(CONTENT_MAX_W).max(280);
        let cx = sx + (avail - cw) / 2;
        let mut y = sy;

        // Hero
        {
            let name_h = 48;
            let tagline_h = est_height(&self.portfolio.owner.tagline, cw, 15);
            let stats_h = 76;
            let sec_h = 56 + name_h + 6 + tagline_h + 36 + stats_h + 56;
            self.blocks[0].group.resize(sx, y, avail, sec_h);

            let mut cy = y + 56;
            self.hero_name.resize(cx, cy, cw, name_h);
            cy += name_h + 6;
            self.hero_tagline.resize(cx, cy, cw, tagline_h);
            cy += tagline_h + 36;
            self.stats_row.resize(cx, cy, cw, stats_h);
            let n = self.stats.len().max(1) as i32;
            let cell_w = cw / n;
            for (i, stat) in self.stats.iter_mut().enumerate() {
                let x = cx + cell_w * i as i32;
                stat.value.resize(x, cy, cell_w, 44);
                stat.label.resize(x, cy + 46, cell_w, 22);
            }
            y += sec_h;
        }

        // About
        {
            let body_h = est_height(&self.portfolio.owner.about, cw, 14);
            let sec_h = SECTION_PAD + TITLE_H + 14 + body_h + SECTION_PAD;
            self.blocks[1].group.resize(sx, y, avail, sec_h);

            let mut cy = y + SECTION_PAD;
            self.blocks[1]
                .title
                .as_mut()
                .expect("about title")
                .resize(cx, cy, cw, TITLE_H);
            cy += TITLE_H + 14;
            self.about_block.resize(cx, cy, cw, body_h);
            self.about_body.resize(cx, cy, cw, body_h);
            y += sec_h;
        }

        // Skills
        {
            let item_heights: Vec<i32> = self
                .portfolio
                .skills
                .iter()
                .map(|g| est_height(&g.items.join("  \u{00b7}  "), cw, 13))
                .collect();
            let rows_h: i32 = item_heights.iter().map(|h| 22 + 4 + h + 16).sum::<i32>() - 16;
            let sec_h = SECTION_PAD + TITLE_H + 14 + rows_h.max(0) + SECTION_PAD;
            self.blocks[2].group.resize(sx, y, avail, sec_h);

            let mut cy = y + SECTION_PAD;
            self.blocks[2]
                .title
                .as_mut()
                .expect("skills title")
                .resize(cx, cy, cw, TITLE_H);
            cy += TITLE_H + 14;
            for ((block, name, items), items_h) in
                self.skill_blocks.iter_mut().zip(&item_heights)
            {
                let block_h = 22 + 4 + items_h;
                block.resize(cx, cy, cw, block_h);
                name.resize(cx, cy, cw, 22);
                items.resize(cx, cy + 26, cw, *items_h);
                cy += block_h + 16;
            }
            y += sec_h;
        }

        // Projects
        {
            let card_heights: Vec<i32> = self
                .portfolio
                .projects
                .iter()
                .map(|p| {
                    let summary_h = est_height(&p.summary, cw - 2 * CARD_PAD, 13);
                    CARD_PAD + 24 + 6 + summary_h + 6 + 20 + 10 + 30 + CARD_PAD
                })
                .collect();
            let cards_h: i32 = card_heights.iter().map(|h| h + 18).sum::<i32>() - 18;
            let sec_h = SECTION_PAD + TITLE_H + 14 + cards_h.max(0) + SECTION_PAD;
            self.blocks[3].group.resize(sx, y, avail, sec_h);

            let mut cy = y + SECTION_PAD;
            self.blocks[3]
                .title
                .as_mut()
                .expect("projects title")
                .resize(cx, cy, cw, TITLE_H);
            cy += TITLE_H + 14;
            for (card, card_h) in self.projects.iter_mut().zip(&card_heights) {
                card.group.resize(cx, cy, cw, *card_h);
                let ix = cx + CARD_PAD;
                let iw = cw - 2 * CARD_PAD;
                let summary_h = card_h - (CARD_PAD + 24 + 6 + 6 + 20 + 10 + 30 + CARD_PAD);
                let mut iy = cy + CARD_PAD;
                card.title.resize(ix, iy, iw, 24);
                iy += 24 + 6;
                card.summary.resize(ix, iy, iw, summary_h);
                iy += summary_h + 6;
                card.tech.resize(ix, iy, iw, 20);
                iy += 20 + 10;
                card.preview_btn.resize(ix, iy, 90, 30);
                if let Some(btn) = &mut card.link_btn {
                    btn.resize(ix + 100, iy, 90, 30);
                }
                cy += card_h + 18;
            }
            y += sec_h;
        }

        // Certificates
        {
            let card_h = CARD_PAD + 22 + 4 + 18 + 10 + 28 + CARD_PAD;
            let count = self.certificates.len().max(1) as i32;
            let sec_h = SECTION_PAD + TITLE_H + 14 + count * (card_h + 14) - 14 + SECTION_PAD;
            self.blocks[4].group.resize(sx, y, avail, sec_h);

            let mut cy = y + SECTION_PAD;
            self.blocks[4]
                .title
                .as_mut()
                .expect("certificates title")
                .resize(cx, cy, cw, TITLE_H);
            cy += TITLE_H + 14;
            for card in self.certificates.iter_mut() {
                card.group.resize(cx, cy, cw, card_h);
                let ix = cx + CARD_PAD;
                let iw = cw - 2 * CARD_PAD;
                let mut iy = cy + CARD_PAD;
                card.title.resize(ix, iy, iw, 22);
                iy += 22 + 4;
                card.meta.resize(ix, iy, iw, 18);
                iy += 18 + 10;
                card.preview_btn.resize(ix, iy, 90, 28);
                cy += card_h + 14;
            }
            y += sec_h;
        }

        // Contact
        {
            let form_h = ContactForm::measured_height();
            let sec_h = SECTION_PAD + TITLE_H + 14 + form_h + 16 + 20 + SECTION_PAD;
            self.blocks[5].group.resize(sx, y, avail, sec_h);

            let mut cy = y + SECTION_PAD;
            self.blocks[5]
                .title
                .as_mut()
                .expect("contact title")
                .resize(cx, cy, cw, TITLE_H);
            cy += TITLE_H + 14;
            let laid = self.form.layout(cx, cy, cw);
            debug_assert_eq!(laid, form_h);
            cy += laid + 16;
            self.contact_hint.resize(cx, cy, cw, 20);
            y += sec_h;
        }

        y - sy
    }

    pub fn scroll_y(&self) -> i32 {
        self.scroll.yposition()
    }

    pub fn viewport_h(&self) -> i32 {
        self.scroll.h()
    }

    pub fn max_scroll(&self) -> i32 {
        (self.content.h() - self.scroll.h()).max(0)
    }

    pub fn scroll_to(&mut self, y: i32) {
        let clamped = y.clamp(0, self.max_scroll());
        self.scroll.scroll_to(0, clamped);
        self.scroll.redraw();
    }

    /// Window y -> content-space y for a child of the scroll.
    fn content_top(&self, widget_y: i32) -> i32 {
        widget_y - self.scroll.y() + self.scroll.yposition()
    }

    /// Section tops in content space, in display order.
    pub fn section_tops(&self) -> Vec<(SectionId, i32)> {
        self.blocks
            .iter()
            .map(|block| (block.id, self.content_top(block.group.y())))
            .collect()
    }

    /// (content top, height) for every reveal-marked element, in order:
    /// about body, skill groups, project cards, certificate cards.
    pub fn reveal_geometry(&self) -> Vec<(i32, i32)> {
        let mut out = Vec::new();
        out.push((self.content_top(self.about_block.y()), self.about_block.h()));
        for (block, _, _) in &self.skill_blocks {
            out.push((self.content_top(block.y()), block.h()));
        }
        for card in &self.projects {
            out.push((self.content_top(card.group.y()), card.group.h()));
        }
        for card in &self.certificates {
            out.push((self.content_top(card.group.y()), card.group.h()));
        }
        out
    }

    /// Mark one reveal target animated-in.
    pub fn reveal(&mut self, index: usize) {
        let skills = self.skill_blocks.len();
        let projects = self.projects.len();
        let target: Option<&mut Group> = if index == 0 {
            Some(&mut self.about_block)
        } else if index < 1 + skills {
            self.skill_blocks.get_mut(index - 1).map(|(g, _, _)| g)
        } else if index < 1 + skills + projects {
            self.projects.get_mut(index - 1 - skills).map(|c| &mut c.group)
        } else {
            self.certificates
                .get_mut(index - 1 - skills - projects)
                .map(|c| &mut c.group)
        };
        if let Some(group) = target {
            group.activate();
            group.redraw();
        }
    }

    pub fn reveal_count(&self) -> usize {
        1 + self.skill_blocks.len() + self.projects.len() + self.certificates.len()
    }

    /// (content top, height) of the hero stats row.
    pub fn stats_geometry(&self) -> (i32, i32) {
        (self.content_top(self.stats_row.y()), self.stats_row.h())
    }

    pub fn stat_values(&self) -> Vec<String> {
        self.portfolio.stats.iter().map(|s| s.value.clone()).collect()
    }

    pub fn set_stat_text(&mut self, index: usize, text: &str) {
        if let Some(stat) = self.stats.get_mut(index) {
            stat.value.set_label(text);
            stat.value.redraw();
        }
    }

    pub fn apply_palette(&mut self, palette: &Palette) {
        self.scroll.set_color(palette.window_bg);
        self.content.set_color(palette.window_bg);
        self.hero_name.set_label_color(palette.text);
        self.hero_tagline.set_label_color(palette.text_muted);
        for stat in &mut self.stats {
            stat.value.set_label_color(palette.accent);
            stat.label.set_label_color(palette.text_muted);
        }
        for block in &mut self.blocks {
            if let Some(title) = &mut block.title {
                title.set_label_color(palette.text);
            }
        }
        self.about_body.set_label_color(palette.text_muted);
        for (_, name, items) in &mut self.skill_blocks {
            name.set_label_color(palette.text);
            items.set_label_color(palette.text_muted);
        }
        for card in &mut self.projects {
            card.group.set_color(palette.card);
            card.title.set_label_color(palette.text);
            card.summary.set_label_color(palette.text_muted);
            card.tech.set_label_color(palette.accent);
            card.preview_btn.set_color(palette.surface);
            card.preview_btn.set_label_color(palette.text);
            if let Some(btn) = &mut card.link_btn {
                btn.set_color(palette.surface);
                btn.set_label_color(palette.text);
            }
        }
        for card in &mut self.certificates {
            card.group.set_color(palette.card);
            card.title.set_label_color(palette.text);
            card.meta.set_label_color(palette.text_muted);
            card.preview_btn.set_color(palette.surface);
            card.preview_btn.set_label_color(palette.text);
        }
        self.contact_hint.set_label_color(palette.text_muted);
        self.form.apply_palette(palette);
        self.scroll.redraw();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_est_height_grows_with_text() {
        let short = est_height("hello", 600, 14);
        let long = est_height(&"word ".repeat(200), 600, 14);
        assert!(long > short);
    }

    #[test]
    fn test_est_height_counts_explicit_newlines() {
        let one = est_height("a", 600, 14);
        let three = est_height("a\nb\nc", 600, 14);
        assert_eq!(three, one * 3);
    }
}
