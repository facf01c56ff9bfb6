use crate::date::parse_date;
use crate::error::Result;
use crate::models::Post;

/// 自动生成的示例文章起止ID
const GENERATED_IDS: std::ops::RangeInclusive<u32> = 5..=20;

fn post(
    id: u32,
    title: &str,
    author: &str,
    publish_date: &str,
    tags: &[&str],
    content: &str,
) -> Result<Post> {
    Ok(Post {
        id,
        title: title.to_string(),
        author: author.to_string(),
        publish_date: parse_date(publish_date)?,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        image_url: format!("https://picsum.photos/800/400?random={}", id),
        content: content.to_string(),
    })
}

/// 内置示例文章：4篇手写文章加16篇生成文章，ID 1 到 20
pub fn sample_posts() -> Result<Vec<Post>> {
    let mut posts = vec![
        post(
            1,
            "Desvendando o CSS Grid Layout",
            "Ana Coder",
            "2025-09-15",
            &["CSS", "Frontend", "Web Design"],
            concat!(
                "<p>O CSS Grid Layout é uma das ferramentas mais poderosas do CSS moderno. Ele nos permite criar layouts complexos e responsivos com uma sintaxe surpreendentemente simples.</p>",
                "<h3>Por que usar Grid?</h3>",
                "<p>Ao contrário do Flexbox, que é unidimensional (linha ou coluna), o Grid é bidimensional. Isso significa que você pode alinhar elementos em linhas e colunas simultaneamente, abrindo um leque de possibilidades.</p>",
                "<blockquote>\"Com grandes poderes vêm grandes responsabilidades.\" - E com Grid, vem um grande poder de layout.</blockquote>",
                "<p>Neste post, vamos explorar desde os conceitos básicos como <code>grid-template-columns</code> e <code>grid-gap</code> até técnicas mais avançadas como <code>grid-area</code> para criar layouts semânticos e fáceis de manter.</p>",
            ),
        )?,
        post(
            2,
            "JavaScript Assíncrono: Promises e Async/Await",
            "Beto Scripter",
            "2025-09-12",
            &["JavaScript", "Frontend", "Backend"],
            concat!(
                "<p>Lidar com operações assíncronas é um desafio comum em JavaScript, especialmente ao fazer requisições a APIs ou ler arquivos. Antigamente, isso levava ao infame \"Callback Hell\".</p>",
                "<h3>A Evolução: Promises</h3>",
                "<p>Promises introduziram uma forma mais limpa e legível de lidar com código assíncrono. Um objeto Promise representa a eventual conclusão (ou falha) de uma operação.</p>",
                "<h3>A Sintaxe Moderna: Async/Await</h3>",
                "<p>Construído sobre Promises, <code>async/await</code> nos permite escrever código assíncrono que se parece e se comporta como código síncrono, tornando-o muito mais intuitivo. Vamos ver exemplos práticos de como refatorar código de Promises para usar essa sintaxe elegante.</p>",
            ),
        )?,
        post(
            3,
            "O Guia Definitivo de Acessibilidade Web (WCAG)",
            "Clara Dev",
            "2025-09-10",
            &["Acessibilidade", "HTML", "Boas Práticas"],
            concat!(
                "<p>Acessibilidade não é um recurso extra, é um requisito fundamental. Garantir que seu site possa ser usado por todos, incluindo pessoas com deficiências, é nossa responsabilidade como desenvolvedores.</p>",
                "<p>Neste guia, vamos cobrir os pilares do WCAG (Web Content Accessibility Guidelines) e mostrar como aplicar técnicas simples de HTML semântico, contraste de cores e navegação por teclado para criar uma web mais inclusiva.</p>",
            ),
        )?,
        post(
            4,
            "Construindo um Backend com Node.js e Express",
            "Davi Server",
            "2025-09-08",
            &["Node.js", "Backend", "JavaScript"],
            concat!(
                "<p>Node.js revolucionou o desenvolvimento backend ao permitir que desenvolvedores usassem JavaScript no lado do servidor. Combinado com o framework Express, criar APIs RESTful se torna uma tarefa rápida e organizada.</p>",
                "<p>Vamos criar um servidor do zero, definir rotas, lidar com requisições HTTP e conectar a um banco de dados simulado. Ao final, você terá uma base sólida para construir suas próprias aplicações backend.</p>",
            ),
        )?,
    ];

    for i in GENERATED_IDS {
        posts.push(post(
            i,
            &format!("Tópico Avançado em Web Dev {}", i),
            &format!("Autor {}", i),
            &format!("2025-08-{}", 25 - i),
            &["JavaScript", "Boas Práticas", "Frontend"],
            &format!(
                "<p>Este é o conteúdo detalhado do post número {}, explorando um tópico avançado sobre desenvolvimento web. A discussão aqui é aprofundada para oferecer insights valiosos.</p><blockquote>Aprender continuamente é a chave para o sucesso no mundo da tecnologia.</blockquote><p>Continuamos a análise com exemplos práticos e snippets de código para facilitar a compreensão.</p>",
                i
            ),
        )?);
    }

    Ok(posts)
}
