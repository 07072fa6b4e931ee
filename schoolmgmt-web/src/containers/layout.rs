use yew::{Children, Html, Properties, function_component, html};

use crate::components::{LoginModal, Navbar};

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
}

/// Landing page frame: navbar, content, footer and the login modal.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
    <>
        <Navbar />
        <main>
            {props.children.clone()}
        </main>
        <footer class="footer">
            <div class="container">
                <p>{"© 2025 SchoolMgmt · School management made simple"}</p>
            </div>
        </footer>
        <LoginModal />
    </>
    }
}
